use crate::rect::Rect;
use nalgebra::Scalar;
use num::Integer;
use std::fmt::Debug;

/*------------------------------------------------------------------------------
TrackedBox struct
------------------------------------------------------------------------------*/

/// A detection rectangle annotated with the track id it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedBox<T>
where
    T: Debug + Scalar + Integer + Copy,
{
    pub rect: Rect<T>,
    pub track_id: usize,
}

impl<T> TrackedBox<T>
where
    T: Debug + Scalar + Integer + Copy,
{
    pub fn new(rect: Rect<T>, track_id: usize) -> Self {
        Self { rect, track_id }
    }

    pub fn get_rect(&self) -> Rect<T> {
        self.rect.clone()
    }

    pub fn get_track_id(&self) -> usize {
        self.track_id
    }
}
