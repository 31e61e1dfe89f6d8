//! # Secant - Segment/Circle Closest-Point Demo
//!
//! For a line segment and a circle, computes the point on the segment closest
//! to the circle's center and reports whether the segment intersects the
//! circle. An interactive demo scatters random points, classifies the segment
//! between every pair of points against the circle, and renders the result.
//!
//! ## Features
//!
//! - Closed-form closest-point solver (projection clamped to the segment)
//! - Strict intersection test against the circle interior
//! - Random scene generation from a seed (reproducible)
//! - Live dragging of scatter points with parallel reclassification
//! - Annotated closest-point construction for the hovered/selected segment
//! - Real-time visualization with egui/macroquad
//! - Save/load scene state as JSON
//!
//! ## Core Modules
//!
//! - [`geometry::solver`] - Closest-point solver and intersection test
//! - [`geometry::scene`] - Demo scene: points, segments, classifications
//! - [`geometry::segment`] - Segment value type
//! - [`geometry::circle`] - Circle value type

/// Core geometric types and the closest-point solver.
pub mod geometry {
    /// Circle value type (center + radius).
    pub mod circle;
    /// Demo scene parameters.
    pub mod params;
    /// Spatial picking for mouse interaction.
    pub mod picking;
    /// Demo scene: scatter points, segment pairs, and their classifications.
    pub mod scene;
    /// Segment value type (two endpoints).
    pub mod segment;
    /// Closest-point solver and circle intersection test.
    pub mod solver;
}

/// Scene rendering with macroquad.
pub mod graphics;

/// User interface panels (configuration, stats, segment inspector).
pub mod ui;
