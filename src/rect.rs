use nalgebra::{Matrix1x2, Matrix1x4, Scalar};
use num::Integer;
use std::fmt::Debug;

/* ------------------------------------------------------------------------------
 * Type aliases
 * ------------------------------------------------------------------------------ */
pub type Xyxy<T> = Matrix1x4<T>;
pub type Center<T> = Matrix1x2<T>;

/* ------------------------------------------------------------------------------
 * Rect struct
 * ------------------------------------------------------------------------------ */

/// Axis-aligned rectangle in `[x1, y1, x2, y2]` corner form.
///
/// Coordinates are signed integers; a rectangle is well formed iff
/// `x2 > x1` and `y2 > y1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect<T>
where
    T: Debug + Scalar + Integer + Copy,
{
    xyxy: Xyxy<T>,
}

impl<T> Rect<T>
where
    T: Debug + Scalar + Integer + Copy,
{
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let xyxy = Matrix1x4::new(x1, y1, x2, y2);
        Self { xyxy }
    }

    #[inline(always)]
    pub fn x1(&self) -> T {
        self.xyxy[(0, 0)]
    }

    #[inline(always)]
    pub fn y1(&self) -> T {
        self.xyxy[(0, 1)]
    }

    #[inline(always)]
    pub fn x2(&self) -> T {
        self.xyxy[(0, 2)]
    }

    #[inline(always)]
    pub fn y2(&self) -> T {
        self.xyxy[(0, 3)]
    }

    pub fn width(&self) -> T {
        self.xyxy[(0, 2)] - self.xyxy[(0, 0)]
    }

    pub fn height(&self) -> T {
        self.xyxy[(0, 3)] - self.xyxy[(0, 1)]
    }

    pub fn is_valid(&self) -> bool {
        self.xyxy[(0, 2)] > self.xyxy[(0, 0)]
            && self.xyxy[(0, 3)] > self.xyxy[(0, 1)]
    }

    /// Canonical centroid: floor division of the coordinate sums.
    ///
    /// Floor division truncates toward negative infinity, so centroids of
    /// boxes with negative coordinates stay bit-for-bit reproducible.
    pub fn center(&self) -> Center<T> {
        let two = T::one() + T::one();
        Matrix1x2::new(
            (self.xyxy[(0, 0)] + self.xyxy[(0, 2)]).div_floor(&two),
            (self.xyxy[(0, 1)] + self.xyxy[(0, 3)]).div_floor(&two),
        )
    }

    /// Get bounding box as [x1, y1, x2, y2] format
    pub fn get_xyxy(&self) -> [T; 4] {
        [
            self.xyxy[(0, 0)],
            self.xyxy[(0, 1)],
            self.xyxy[(0, 2)],
            self.xyxy[(0, 3)],
        ]
    }

    /// Create Rect from [x, y, width, height] format
    pub fn from_tlwh(x: T, y: T, width: T, height: T) -> Self {
        Self::new(x, y, x + width, y + height)
    }
}
