//! Segment entity: the finite line between two endpoints.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::solver;

/// A line segment between two endpoints.
///
/// The segment covers the finite stretch from `p1` to `p2`, not the infinite
/// line through them. A segment with `p1 == p2` is degenerate and behaves as
/// the single point `p1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub p1: Array1<f32>,
    /// Second endpoint.
    pub p2: Array1<f32>,
}

impl Segment {
    /// Creates a new segment between two endpoints.
    pub fn new(p1: Array1<f32>, p2: Array1<f32>) -> Self {
        Self { p1, p2 }
    }

    /// Returns the direction vector from `p1` to `p2`.
    pub fn direction(&self) -> Array1<f32> {
        &self.p2 - &self.p1
    }

    /// Returns the squared length of the segment.
    pub fn length_squared(&self) -> f32 {
        let dir = self.direction();
        dir.dot(&dir)
    }

    /// Returns the length of the segment.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the midpoint of the segment.
    pub fn midpoint(&self) -> Array1<f32> {
        (&self.p1 + &self.p2) / 2.0
    }

    /// Evaluates the segment at parameter `r`.
    ///
    /// `r = 0` gives `p1` and `r = 1` gives `p2`. Values outside `[0, 1]`
    /// land on the infinite line beyond the endpoints.
    pub fn point_at(&self, r: f32) -> Array1<f32> {
        &self.p1 + &(self.direction() * r)
    }

    /// Finds the point on this segment closest to `target`.
    ///
    /// Returns the closest point and the clamped projection parameter.
    pub fn closest_point_to(&self, target: &Array1<f32>) -> (Array1<f32>, f32) {
        solver::closest_point_on_segment(&self.p1, &self.p2, target)
    }
}
