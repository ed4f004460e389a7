//! Pairwise overlap and proximity metrics.

use crate::{Rect, RectNum};

/// Intersection over union of two boxes, in `[0, 1]`.
///
/// Returns `0.0` when the union area is zero, e.g. for two identical
/// zero-area boxes.
pub fn iou<A, B>(lhs: &A, rhs: &B) -> f64
where
    A: Rect,
    B: Rect<Type = A::Type>,
{
    lhs.iou_with(rhs)
}

/// Euclidean distance between the centers of two boxes.
pub fn center_distance<A, B>(lhs: &A, rhs: &B) -> f64
where
    A: Rect,
    B: Rect<Type = A::Type>,
{
    lhs.center_distance_to(rhs)
}
