//! Spatial queries for mouse picking.
//!
//! Scatter points are indexed with a k-d tree and queried by radius.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use ndarray::Array1;

/// Type alias for the 2D k-d tree used for point picking.
pub type Tree2D = KdTree<f32, usize, Vec<f32>>;

/// Builds a k-d tree over a set of points.
fn build_tree(points: &[Array1<f32>]) -> Result<Tree2D, KdTreeError> {
    let mut tree = KdTree::with_capacity(2, points.len());
    for (i, point) in points.iter().enumerate() {
        tree.add(point.to_vec(), i)?;
    }
    Ok(tree)
}

/// Finds the point nearest to `target` within `radius`.
///
/// # Arguments
///
/// * `points` - Candidate points
/// * `target` - Query position
/// * `radius` - Maximum picking distance
///
/// # Returns
///
/// Distance and index of the nearest point, or `None` when no point lies
/// within the radius.
pub fn nearest_point(
    points: &[Array1<f32>],
    target: &Array1<f32>,
    radius: f32,
) -> Option<(f32, usize)> {
    let tree = build_tree(points).ok()?;
    let neighbors = tree
        .within(&target.to_vec(), radius.powi(2), &squared_euclidean)
        .unwrap_or_default();

    let mut nearest = None;
    let mut min_distance = f32::MAX;
    for (dist_sq, &idx) in neighbors {
        let dist = dist_sq.sqrt();
        if dist < min_distance {
            min_distance = dist;
            nearest = Some((dist, idx));
        }
    }
    nearest
}
