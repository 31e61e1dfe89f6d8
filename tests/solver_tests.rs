#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secant::geometry::circle::Circle;
use secant::geometry::segment::Segment;
use secant::geometry::solver;

fn point(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

fn random_point(rng: &mut StdRng) -> Array1<f32> {
    point(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0))
}

#[test]
fn test_projection_hits_segment_interior() {
    // Horizontal segment straddling the circle, closest point at the center
    let result = solver::solve(
        &point(-2.0, 0.0),
        &point(2.0, 0.0),
        &Circle::new(point(0.0, 0.0), 1.0),
    );

    assert_eq!(result.r, 0.5);
    assert_eq!(result.pos[0], 0.0);
    assert_eq!(result.pos[1], 0.0);
    assert_eq!(result.distance, 0.0);
    assert!(result.intersects);
}

#[test]
fn test_projection_clamps_to_first_endpoint() {
    // The center projects onto the boundary of the parameter range
    let result = solver::solve(
        &point(0.0, 2.0),
        &point(2.0, 2.0),
        &Circle::new(point(0.0, 0.0), 1.0),
    );

    assert_eq!(result.r, 0.0);
    assert_eq!(result.pos[0], 0.0);
    assert_eq!(result.pos[1], 2.0);
    assert_eq!(result.distance, 2.0);
    assert!(!result.intersects);
}

#[test]
fn test_projection_clamps_to_second_endpoint() {
    // The center lies beyond p2, so the projection clamps to r = 1
    let result = solver::solve(
        &point(-2.0, -2.0),
        &point(-1.0, -1.0),
        &Circle::new(point(0.0, 0.0), 1.0),
    );

    assert_eq!(result.r, 1.0);
    assert_eq!(result.pos[0], -1.0);
    assert_eq!(result.pos[1], -1.0);
    assert_eq!(result.distance, 2.0_f32.sqrt());
    assert!(!result.intersects);
}

#[test]
fn test_interior_projection_outside_circle() {
    // Closest point is the segment midpoint but too far from the center
    let result = solver::solve(
        &point(-1.0, 0.0),
        &point(1.0, 0.0),
        &Circle::new(point(0.0, 2.0), 1.0),
    );

    assert_eq!(result.r, 0.5);
    assert_eq!(result.pos[0], 0.0);
    assert_eq!(result.pos[1], 0.0);
    assert_eq!(result.distance, 2.0);
    assert!(!result.intersects);
}

#[test]
fn test_zero_length_segment() {
    // Both endpoints coincide, the segment behaves as a single point
    let result = solver::solve(
        &point(0.0, 0.0),
        &point(0.0, 0.0),
        &Circle::new(point(1.0, 0.0), 2.0),
    );

    assert_eq!(result.r, 0.0);
    assert_eq!(result.pos[0], 0.0);
    assert_eq!(result.pos[1], 0.0);
    assert_eq!(result.distance, 1.0);
    assert!(result.intersects);
}

#[test]
fn test_zero_length_segment_outside_circle() {
    let result = solver::solve(
        &point(5.0, 5.0),
        &point(5.0, 5.0),
        &Circle::new(point(0.0, 0.0), 1.0),
    );

    assert_eq!(result.r, 0.0);
    assert_eq!(result.distance, 50.0_f32.sqrt());
    assert!(!result.intersects);
}

#[test]
fn test_tangent_segment_does_not_intersect() {
    // Closest approach exactly on the boundary counts as non-intersecting
    let result = solver::solve(
        &point(-1.0, 1.0),
        &point(1.0, 1.0),
        &Circle::new(point(0.0, 0.0), 1.0),
    );

    assert_eq!(result.distance, 1.0);
    assert!(!result.intersects);
}

#[test]
fn test_boundary_distance_flips_with_radius() {
    let p1 = point(-1.0, 1.0);
    let p2 = point(1.0, 1.0);

    let grazing = solver::solve(&p1, &p2, &Circle::new(point(0.0, 0.0), 1.0));
    assert!(!grazing.intersects);

    let slightly_larger = solver::solve(&p1, &p2, &Circle::new(point(0.0, 0.0), 1.001));
    assert!(slightly_larger.intersects);
}

#[test]
fn test_zero_radius_circle_never_intersects() {
    // Even a segment through the center misses a radius-zero circle
    let result = solver::solve(
        &point(-1.0, -1.0),
        &point(1.0, 1.0),
        &Circle::new(point(0.0, 0.0), 0.0),
    );

    assert_eq!(result.distance, 0.0);
    assert!(!result.intersects);
}

#[test]
fn test_solver_is_deterministic() {
    let p1 = point(-1.3, 0.7);
    let p2 = point(2.1, -0.4);
    let circle = Circle::new(point(0.3, 0.2), 0.9);

    let first = solver::solve(&p1, &p2, &circle);
    let second = solver::solve(&p1, &p2, &circle);

    assert_eq!(first, second);
}

#[test]
fn test_closest_point_lies_on_segment() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..200 {
        let p1 = random_point(&mut rng);
        let p2 = random_point(&mut rng);
        let circle = Circle::new(random_point(&mut rng), rng.random_range(0.0..3.0));

        let result = solver::solve(&p1, &p2, &circle);

        // The parameter stays in range and reconstructs the closest point
        assert!((0.0..=1.0).contains(&result.r));
        let reconstructed = &p1 + &((&p2 - &p1) * result.r);
        assert!((result.pos[0] - reconstructed[0]).abs() < 1e-5);
        assert!((result.pos[1] - reconstructed[1]).abs() < 1e-5);

        // The flag agrees with the reported distance
        assert_eq!(result.intersects, result.distance < circle.radius);
    }
}

#[test]
fn test_closest_point_beats_sampled_points() {
    let mut rng = StdRng::seed_from_u64(29);

    for _ in 0..50 {
        let p1 = random_point(&mut rng);
        let p2 = random_point(&mut rng);
        let circle = Circle::new(random_point(&mut rng), 1.0);

        let result = solver::solve(&p1, &p2, &circle);

        // No sampled point along the segment comes closer than the solution
        for i in 0..=20 {
            let r = i as f32 / 20.0;
            let sample = &p1 + &((&p2 - &p1) * r);
            let sample_distance = solver::distance(&sample, &circle.pos);
            assert!(result.distance <= sample_distance + 1e-5);
        }
    }
}

#[test]
fn test_distance_matches_geo() {
    use geo::algorithm::Distance;
    use geo::{Euclidean, Line, Point};

    let mut rng = StdRng::seed_from_u64(43);

    for _ in 0..100 {
        let p1 = random_point(&mut rng);
        let p2 = random_point(&mut rng);
        let center = random_point(&mut rng);

        let result = solver::solve(&p1, &p2, &Circle::new(center.clone(), 1.0));

        let p = Point::new(center[0], center[1]);
        let line = Line::new(Point::new(p1[0], p1[1]), Point::new(p2[0], p2[1]));
        let expected = Euclidean.distance(&p, &line);

        assert!((result.distance - expected).abs() < 1e-3);
    }
}

#[test]
fn test_segment_closest_point_matches_solver() {
    let segment = Segment::new(point(-2.0, 1.0), point(3.0, -1.0));
    let target = point(0.5, 0.5);

    let (from_segment, r_segment) = segment.closest_point_to(&target);
    let (from_solver, r_solver) = solver::closest_point_on_segment(&segment.p1, &segment.p2, &target);

    assert_eq!(r_segment, r_solver);
    assert_eq!(from_segment, from_solver);
}

#[test]
fn test_segment_point_at_endpoints() {
    let segment = Segment::new(point(1.0, 2.0), point(3.0, -4.0));

    let start = segment.point_at(0.0);
    assert_eq!(start[0], 1.0);
    assert_eq!(start[1], 2.0);

    let end = segment.point_at(1.0);
    assert_eq!(end[0], 3.0);
    assert_eq!(end[1], -4.0);

    let mid = segment.midpoint();
    assert_eq!(mid[0], 2.0);
    assert_eq!(mid[1], -1.0);
}

#[test]
fn test_segment_length() {
    let segment = Segment::new(point(0.0, 0.0), point(3.0, 4.0));

    assert_eq!(segment.length_squared(), 25.0);
    assert_eq!(segment.length(), 5.0);
}

#[test]
fn test_circle_contains_is_strict() {
    let circle = Circle::new(point(0.0, 0.0), 1.0);

    assert!(circle.contains(&point(0.5, 0.0)));
    assert!(!circle.contains(&point(1.0, 0.0)));
    assert!(!circle.contains(&point(2.0, 0.0)));
}
