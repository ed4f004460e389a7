use crate::common::*;

/// Coordinate type of a rectangle.
///
/// Coordinates are stored in their native type (pixel boxes use `i32`) and
/// widened to `f64` wherever a center or a ratio is computed.
pub trait Element: Copy + Num + PartialOrd + Into<f64> {}

impl<T> Element for T where T: Copy + Num + PartialOrd + Into<f64> {}
