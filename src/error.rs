use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("invalid detection [{x1}, {y1}, {x2}, {y2}]: expected x2 > x1 and y2 > y1")]
    InvalidDetection { x1: i64, y1: i64, x2: i64, y2: i64 },
}
