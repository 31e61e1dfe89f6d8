//! Scene state: scatter points, the segments between them, and their
//! classification against the circle.
//!
//! The scene manages all demo state. It handles:
//! - Seeded random point sampling
//! - Classifying every segment against the circle in parallel
//! - Moving points with live reclassification
//! - Saving and loading the scene as JSON

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand_distr::StandardNormal;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::params::Params;
use super::picking;
use super::segment::Segment;
use super::solver::{self, ClosestPoint};

/// The full demo scene.
///
/// Every unordered pair of scatter points spans one segment, stored as a
/// pair of point indices. `hits` holds one classification per pair and is
/// kept in sync with the points and the circle by the mutating methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scatter point positions.
    pub points: Vec<Array1<f32>>,
    /// Endpoint indices of every segment, one entry per unordered pair.
    pub pairs: Vec<(usize, usize)>,
    /// Classification of each segment, parallel to `pairs`.
    pub hits: Vec<ClosestPoint>,
    /// The circle segments are classified against.
    pub circle: Circle,
}

impl Scene {
    /// Creates a new scene with points sampled from the parameter seed.
    pub fn new(params: &Params) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);

        let points: Vec<Array1<f32>> = (0..params.n_points)
            .map(|_| Array1::random_using(2, StandardNormal, &mut rng) * params.spread)
            .collect();

        let n = points.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((i, j));
            }
        }

        let mut scene = Self {
            points,
            pairs,
            hits: Vec::new(),
            circle: params.circle(),
        };
        scene.reclassify();
        scene
    }

    /// Recomputes every segment classification from the current geometry.
    ///
    /// The solver calls are independent, so the pairs are processed in
    /// parallel.
    pub fn reclassify(&mut self) {
        self.hits = self
            .pairs
            .par_iter()
            .map(|&(i, j)| solver::solve(&self.points[i], &self.points[j], &self.circle))
            .collect();
    }

    /// Materializes the `k`-th pair as a segment.
    ///
    /// Returns `None` for an out-of-range index.
    pub fn segment(&self, k: usize) -> Option<Segment> {
        let &(i, j) = self.pairs.get(k)?;
        Some(Segment::new(self.points[i].clone(), self.points[j].clone()))
    }

    /// Moves a scatter point and reclassifies the segments.
    ///
    /// Out-of-range indices are ignored.
    pub fn move_point(&mut self, idx: usize, pos: Array1<f32>) {
        if idx < self.points.len() {
            self.points[idx] = pos;
            self.reclassify();
        }
    }

    /// Replaces the circle and reclassifies the segments.
    pub fn set_circle(&mut self, circle: Circle) {
        self.circle = circle;
        self.reclassify();
    }

    /// Counts the segments currently intersecting the circle.
    pub fn intersecting(&self) -> usize {
        self.hits.iter().filter(|hit| hit.intersects).count()
    }

    /// Finds the scatter point nearest to `target` within `radius`.
    pub fn nearest_point(&self, target: &Array1<f32>, radius: f32) -> Option<(f32, usize)> {
        picking::nearest_point(&self.points, target, radius)
    }

    /// Finds the segment nearest to `target` within `radius`.
    ///
    /// Probes every segment with the solver, treating the cursor as a
    /// circle of radius `radius`.
    pub fn nearest_segment(&self, target: &Array1<f32>, radius: f32) -> Option<(f32, usize)> {
        let probe = Circle::new(target.clone(), radius);

        let mut nearest = None;
        let mut min_distance = f32::MAX;
        for (k, &(i, j)) in self.pairs.iter().enumerate() {
            let hit = solver::solve(&self.points[i], &self.points[j], &probe);
            if hit.intersects && hit.distance < min_distance {
                min_distance = hit.distance;
                nearest = Some((hit.distance, k));
            }
        }
        nearest
    }

    /// Saves the scene state to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a scene state from a JSON file.
    ///
    /// Rejects files whose pair indices fall outside the point list or
    /// whose classification list is not parallel to the pairs.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let scene: Self = serde_json::from_str(&json)?;
        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.hits.len() != self.pairs.len() {
            return Err(format!(
                "scene has {} classifications for {} segments",
                self.hits.len(),
                self.pairs.len()
            )
            .into());
        }
        for &(i, j) in &self.pairs {
            if i >= j || j >= self.points.len() {
                return Err(format!(
                    "segment pair ({i}, {j}) is invalid for {} points",
                    self.points.len()
                )
                .into());
            }
        }
        Ok(())
    }
}
