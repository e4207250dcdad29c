//! Single track management for CentroidTracker
//!
//! This module provides the `Track` struct that represents one tracked
//! object: its persistent id, last matched centroid, and the bounded
//! window of recent centroids used for velocity estimation.

use crate::rect::Center;
use nalgebra::Matrix1x2;
use std::collections::VecDeque;

/// Real-valued predicted centroid, `[x, y]`.
pub type Prediction = Matrix1x2<f64>;

/*----------------------------------------------------------------------------
Track struct
----------------------------------------------------------------------------*/

#[derive(Debug, Clone)]
pub struct Track {
    track_id: usize,
    center: Center<i64>,
    history: VecDeque<Center<i64>>,
    max_history: usize,
}

impl Track {
    /// Create a new track from its first observed centroid.
    ///
    /// The history starts out holding exactly that centroid.
    pub(crate) fn new(
        track_id: usize,
        center: Center<i64>,
        max_history: usize,
    ) -> Self {
        let mut history = VecDeque::with_capacity(max_history);
        history.push_back(center);
        Self {
            track_id,
            center,
            history,
            max_history,
        }
    }

    pub fn get_track_id(&self) -> usize {
        self.track_id
    }

    pub fn get_center(&self) -> Center<i64> {
        self.center
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> impl Iterator<Item = &Center<i64>> {
        self.history.iter()
    }

    /// Record a matched centroid: replace the stored center and append to
    /// the history, evicting the oldest entry beyond `max_history`.
    pub(crate) fn observe(&mut self, center: Center<i64>) {
        self.center = center;
        self.history.push_back(center);
        if self.history.len() > self.max_history {
            self.history.pop_front();
        }
    }

    /// Constant-velocity extrapolation over the history window.
    ///
    /// Accumulates the frame-to-frame displacement over consecutive history
    /// pairs, divides by `history_len - 1` in real arithmetic, and adds the
    /// mean step to the most recent centroid. Returns `None` while the
    /// history holds fewer than 2 entries.
    pub fn predict_next_position(&self) -> Option<Prediction> {
        if self.history.len() < 2 {
            return None;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;
        let mut iter = self.history.iter();
        let mut prev = iter.next()?;
        for cur in iter {
            dx += (cur[(0, 0)] - prev[(0, 0)]) as f64;
            dy += (cur[(0, 1)] - prev[(0, 1)]) as f64;
            prev = cur;
        }

        let steps = (self.history.len() - 1) as f64;
        dx /= steps;
        dy /= steps;

        let last = self.history.back()?;
        Some(Matrix1x2::new(
            last[(0, 0)] as f64 + dx,
            last[(0, 1)] as f64 + dy,
        ))
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.track_id == other.track_id
    }
}
