//! Closest-point solver for segments and circles.
//!
//! A segment from `p1` to `p2` is parametrized as `p(r) = p1 + r * (p2 - p1)`.
//! The point closest to a target follows from projecting the target onto the
//! segment direction and clamping the parameter to `[0, 1]`, which keeps the
//! result on the finite segment rather than the infinite line through it.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::circle::Circle;

/// Result of classifying a segment against a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosestPoint {
    /// The point on the segment closest to the circle center.
    pub pos: Array1<f32>,
    /// Clamped projection parameter: 0 is the first endpoint, 1 the second.
    pub r: f32,
    /// Euclidean distance from the closest point to the circle center.
    pub distance: f32,
    /// Whether the closest point lies strictly inside the circle.
    ///
    /// A segment whose closest approach lands exactly on the boundary
    /// (`distance == radius`) does not count as intersecting.
    pub intersects: bool,
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    (a - b).mapv(|x| x.powi(2)).sum().sqrt()
}

/// Finds the point on the segment from `p1` to `p2` closest to `target`.
///
/// # Arguments
///
/// * `p1` - First endpoint of the segment
/// * `p2` - Second endpoint of the segment
/// * `target` - Point to project onto the segment
///
/// # Returns
///
/// The closest point together with the clamped projection parameter. A
/// zero-length segment has no direction to project onto, so its single
/// point is returned with a parameter of 0.
pub fn closest_point_on_segment(
    p1: &Array1<f32>,
    p2: &Array1<f32>,
    target: &Array1<f32>,
) -> (Array1<f32>, f32) {
    let dir = p2 - p1;
    let len_sq = dir.dot(&dir);

    // the projection below divides by the squared segment length
    if len_sq <= 0.0 {
        return (p1.clone(), 0.0);
    }

    let r = ((target - p1).dot(&dir) / len_sq).clamp(0.0, 1.0);
    (p1 + &(&dir * r), r)
}

/// Classifies the segment from `p1` to `p2` against a circle.
///
/// # Arguments
///
/// * `p1` - First endpoint of the segment
/// * `p2` - Second endpoint of the segment
/// * `circle` - Circle to classify against
///
/// # Returns
///
/// The closest point on the segment to the circle center, the distance
/// between them, and whether that point lies strictly inside the circle.
pub fn solve(p1: &Array1<f32>, p2: &Array1<f32>, circle: &Circle) -> ClosestPoint {
    let (pos, r) = closest_point_on_segment(p1, p2, &circle.pos);
    let d = distance(&pos, &circle.pos);

    ClosestPoint {
        pos,
        r,
        distance: d,
        intersects: d < circle.radius,
    }
}
