//! Parameters controlling scene generation and interaction.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::circle::Circle;

/// Scene parameters, editable from the configuration screen and the
/// side panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Number of scatter points to sample.
    pub n_points: usize,
    /// Standard deviation of the normal distribution points are drawn from.
    pub spread: f32,
    /// Seed for point sampling. Equal seeds reproduce the same scene.
    pub seed: u64,
    /// Circle center x coordinate.
    pub circle_x: f32,
    /// Circle center y coordinate.
    pub circle_y: f32,
    /// Circle radius.
    pub circle_radius: f32,
    /// Mouse picking distance in world units.
    pub pick_radius: f32,
    /// Half-extent of the world region mapped onto the screen.
    pub view_extent: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n_points: 10,
            spread: 1.0,
            seed: 42,
            circle_x: 0.0,
            circle_y: 0.0,
            circle_radius: 1.0,
            pick_radius: 0.08,
            view_extent: 3.0,
        }
    }
}

impl Params {
    /// Assembles the circle from the scalar fields.
    pub fn circle(&self) -> Circle {
        Circle::new(
            Array1::from_vec(vec![self.circle_x, self.circle_y]),
            self.circle_radius,
        )
    }

    /// Copies a circle back into the scalar fields, e.g. after loading a
    /// saved scene.
    pub fn set_circle(&mut self, circle: &Circle) {
        self.circle_x = circle.pos[0];
        self.circle_y = circle.pos[1];
        self.circle_radius = circle.radius;
    }
}
