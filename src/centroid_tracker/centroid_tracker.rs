//! Main CentroidTracker implementation
//!
//! This module provides the `CentroidTracker` struct that assigns
//! persistent ids to per-frame detections by centroid proximity and
//! estimates short-term velocity from each track's recent centroids.

use super::track::{Prediction, Track};
use crate::error::TrackError;
use crate::object::TrackedBox;
use crate::rect::{Center, Rect};
use log::{debug, trace};
use std::collections::HashSet;

/// Euclidean distance between two centroids, in input coordinate units.
fn centroid_distance(a: &Center<i64>, b: &Center<i64>) -> f64 {
    let dx = (a[(0, 0)] - b[(0, 0)]) as f64;
    let dy = (a[(0, 1)] - b[(0, 1)]) as f64;
    dx.hypot(dy)
}

/*-----------------------------------------------------------------------------
CentroidTracker
-----------------------------------------------------------------------------*/

/// CentroidTracker - Nearest-centroid multi-object tracker
///
/// Matches each frame's detections to live tracks by centroid distance,
/// creates a track for every detection that matches nothing, and drops any
/// track that received no detection this frame. Matching is greedy and
/// order-dependent: tracks are scanned in creation order, the first one
/// strictly within `max_distance` wins, and its center is updated in place
/// before the next detection is processed.
#[derive(Debug)]
pub struct CentroidTracker {
    max_distance: f64,
    max_history: usize,

    frame_count: usize,
    track_id_count: usize,

    tracks: Vec<Track>,
}

impl CentroidTracker {
    /// Create a new CentroidTracker.
    ///
    /// # Arguments
    /// * `max_distance` - Matching radius between a detection centroid and a
    ///   track's last known centroid, in input coordinate units
    /// * `max_history` - Size of the per-track centroid window used for
    ///   velocity estimation
    ///
    /// # Example
    /// ```
    /// use centrack_rs::centroid_tracker::CentroidTracker;
    /// let tracker = CentroidTracker::new(50.0, 5);
    /// ```
    pub fn new(max_distance: f64, max_history: usize) -> Self {
        Self {
            max_distance,
            max_history,
            frame_count: 0,
            track_id_count: 0,
            tracks: Vec::new(),
        }
    }

    /// Update tracker with one frame of detections.
    ///
    /// Every detection is validated before any track is touched; a malformed
    /// rectangle fails the whole call and leaves the tracker state unchanged.
    ///
    /// # Arguments
    /// * `detections` - Detected boxes for this frame, in detector output order
    ///
    /// # Returns
    /// One `TrackedBox` per input detection, in input order. After the call
    /// the live-track set is exactly the ids present in the output.
    pub fn update(
        &mut self,
        detections: &[Rect<i64>],
    ) -> Result<Vec<TrackedBox<i64>>, TrackError> {
        for rect in detections {
            if !rect.is_valid() {
                return Err(TrackError::InvalidDetection {
                    x1: rect.x1(),
                    y1: rect.y1(),
                    x2: rect.x2(),
                    y2: rect.y2(),
                });
            }
        }

        self.frame_count += 1;

        let mut output: Vec<TrackedBox<i64>> =
            Vec::with_capacity(detections.len());

        for rect in detections {
            let center = rect.center();

            // First track strictly within max_distance wins. The scan runs
            // against live centers, so a track matched earlier in this call
            // is seen here at its already-updated position.
            let matched = self.tracks.iter().position(|track| {
                centroid_distance(&track.get_center(), &center)
                    < self.max_distance
            });

            match matched {
                Some(index) => {
                    let track = &mut self.tracks[index];
                    track.observe(center);
                    trace!(
                        "frame {}: matched track {} at ({}, {})",
                        self.frame_count,
                        track.get_track_id(),
                        center[(0, 0)],
                        center[(0, 1)]
                    );
                    output.push(TrackedBox::new(
                        rect.clone(),
                        track.get_track_id(),
                    ));
                }
                None => {
                    let track_id = self.track_id_count;
                    self.track_id_count += 1;
                    self.tracks.push(Track::new(
                        track_id,
                        center,
                        self.max_history,
                    ));
                    debug!(
                        "frame {}: new track {} at ({}, {})",
                        self.frame_count,
                        track_id,
                        center[(0, 0)],
                        center[(0, 1)]
                    );
                    output.push(TrackedBox::new(rect.clone(), track_id));
                }
            }
        }

        // Keep exactly the ids emitted this frame; everything else is gone
        // for good. A reappearing object becomes a new track.
        let live = output
            .iter()
            .map(|tracked| tracked.get_track_id())
            .collect::<HashSet<usize>>();
        let before = self.tracks.len();
        self.tracks
            .retain(|track| live.contains(&track.get_track_id()));
        if self.tracks.len() < before {
            debug!(
                "frame {}: dropped {} unmatched track(s)",
                self.frame_count,
                before - self.tracks.len()
            );
        }

        Ok(output)
    }

    /// Predict the next centroid of a track from its mean frame-to-frame
    /// displacement.
    ///
    /// # Returns
    /// `None` for an unknown id or a track with fewer than 2 stored
    /// centroids.
    pub fn predict_next_position(&self, track_id: usize) -> Option<Prediction> {
        self.tracks
            .iter()
            .find(|track| track.get_track_id() == track_id)?
            .predict_next_position()
    }

    /// Get the matching radius.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Get the velocity-estimation window size.
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Get current frame count.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Get number of live tracks.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Get live track ids in creation order.
    pub fn track_ids(&self) -> Vec<usize> {
        self.tracks.iter().map(Track::get_track_id).collect()
    }

    /// Get a live track by id.
    pub fn get_track(&self, track_id: usize) -> Option<&Track> {
        self.tracks
            .iter()
            .find(|track| track.get_track_id() == track_id)
    }
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new(50.0, 5)
    }
}
