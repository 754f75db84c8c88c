//! Cube extents shared by all three axes.

use crate::{Point3, UniformSource, WalkError};

/// Inclusive extents `[min, max]` of an axis-aligned cube.
///
/// Invariant: `min < max`, and `max - min` fits in an `i64`. The same range
/// applies to x, y and z, so the solid is always a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    /// Create validated bounds.
    pub fn new(min: i64, max: i64) -> Result<Self, WalkError> {
        if min >= max || max.checked_sub(min).is_none() {
            return Err(WalkError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower extreme on every axis.
    #[must_use]
    pub fn min(self) -> i64 {
        self.min
    }

    /// Upper extreme on every axis.
    #[must_use]
    pub fn max(self) -> i64 {
        self.max
    }

    /// Edge length of the cube.
    #[must_use]
    pub fn extent(self) -> i64 {
        self.max - self.min
    }

    /// Returns true if `value` equals either extreme.
    #[must_use]
    pub fn is_extreme(self, value: i64) -> bool {
        value == self.min || value == self.max
    }

    /// Returns true if every coordinate of `point` lies in `[min, max]`.
    #[must_use]
    pub fn contains(self, point: Point3) -> bool {
        point
            .to_array()
            .iter()
            .all(|&c| c >= self.min && c <= self.max)
    }

    /// Returns true if at least one coordinate of `point` sits at an extreme.
    #[must_use]
    pub fn touches_surface(self, point: Point3) -> bool {
        point.to_array().iter().any(|&c| self.is_extreme(c))
    }

    /// Draw a free-axis coordinate: `floor(min + u * (max - min))`, which
    /// lands in `[min, max - 1]` for `u` in `[0, 1)`.
    pub(crate) fn sample_coord(self, source: &mut impl UniformSource) -> i64 {
        let u = source.next_unit();
        let value = (self.min as f64 + u * self.extent() as f64).floor() as i64;
        value.clamp(self.min, self.max - 1)
    }
}
