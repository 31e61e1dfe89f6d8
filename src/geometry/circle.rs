//! Circle entity used as the classification target.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::solver;

/// A circle with a center position and a radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position.
    pub pos: Array1<f32>,
    /// Radius, expected to be non-negative.
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(pos: Array1<f32>, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Checks whether a point lies strictly inside the circle.
    ///
    /// Points exactly on the boundary are outside.
    pub fn contains(&self, point: &Array1<f32>) -> bool {
        solver::distance(point, &self.pos) < self.radius
    }
}
