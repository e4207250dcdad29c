mod centroid_tracker;
mod track;

pub use crate::error::TrackError;
pub use crate::rect::Rect;
pub use centroid_tracker::CentroidTracker;
pub use track::{Prediction, Track};
