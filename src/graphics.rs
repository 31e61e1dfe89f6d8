use crate::geometry::params::Params;
use crate::geometry::scene::Scene;
use macroquad::prelude::*;
use ndarray::Array1;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Array1<f32> {
    type Output = Array1<f32>;
    // world coordinates are origin-centered with y up, the screen has y down
    fn to_screen(&self, params: &Params) -> Array1<f32> {
        let scale = world_scale(params);
        Array1::from_vec(vec![
            screen_width() / 2.0 + self[0] * scale,
            screen_height() / 2.0 - self[1] * scale,
        ])
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        self * world_scale(params)
    }
}

// uniform scale keeps circles round regardless of the window shape
fn world_scale(params: &Params) -> f32 {
    screen_width().min(screen_height()) / (2.0 * params.view_extent)
}

/// Converts a screen position, e.g. the mouse, into world coordinates.
pub fn screen_to_world(screen: (f32, f32), params: &Params) -> Array1<f32> {
    let scale = world_scale(params);
    Array1::from_vec(vec![
        (screen.0 - screen_width() / 2.0) / scale,
        (screen_height() / 2.0 - screen.1) / scale,
    ])
}

/// Draws the circle, every segment colored by intersection status, and the
/// scatter points on top.
pub fn draw_scene(scene: &Scene, params: &Params) {
    // circle first so the segments stay visible on top of the fill
    let center = scene.circle.pos.to_screen(params);
    let screen_radius = scene.circle.radius.to_screen(params);
    draw_circle(
        center[0],
        center[1],
        screen_radius,
        Color::from_rgba(255, 0, 0, 50),
    );
    draw_circle_lines(
        center[0],
        center[1],
        screen_radius,
        1.0,
        Color::from_rgba(255, 0, 0, 120),
    );

    for (k, &(i, j)) in scene.pairs.iter().enumerate() {
        let start = scene.points[i].to_screen(params);
        let end = scene.points[j].to_screen(params);
        let color = if scene.hits[k].intersects {
            Color::from_rgba(255, 0, 0, 255)
        } else {
            Color::from_rgba(0, 0, 0, 255)
        };
        draw_line(start[0], start[1], end[0], end[1], 1.0, color);
    }

    for point in scene.points.iter() {
        let screen_pos = point.to_screen(params);
        draw_circle(
            screen_pos[0],
            screen_pos[1],
            3.0,
            Color::from_rgba(31, 119, 180, 255),
        );
    }
}

/// Draws a marker on every segment's closest point to the circle center.
pub fn draw_closest_points(scene: &Scene, params: &Params) {
    scene.hits.iter().for_each(|hit| {
        let screen_pos = hit.pos.to_screen(params);
        let color = if hit.intersects {
            Color::from_rgba(255, 0, 0, 200)
        } else {
            Color::from_rgba(100, 100, 100, 200)
        };
        draw_circle(screen_pos[0], screen_pos[1], 2.0, color);
    });
}

/// Draws the closest-point construction for one segment: the segment
/// emphasized, a guide line from the closest point to the circle center,
/// and labels on the endpoints, the closest point and the center.
pub fn draw_annotation(scene: &Scene, k: usize, params: &Params) {
    let Some(segment) = scene.segment(k) else {
        return;
    };
    let hit = &scene.hits[k];

    let p1 = segment.p1.to_screen(params);
    let p2 = segment.p2.to_screen(params);
    let p = hit.pos.to_screen(params);
    let c = scene.circle.pos.to_screen(params);

    let color = if hit.intersects {
        Color::from_rgba(255, 0, 0, 255)
    } else {
        Color::from_rgba(0, 0, 0, 255)
    };
    draw_line(p1[0], p1[1], p2[0], p2[1], 3.0, color);

    // distance guide from the closest point to the center
    draw_line(p[0], p[1], c[0], c[1], 1.0, Color::from_rgba(100, 100, 100, 200));

    for (label, screen_pos) in [("p1", &p1), ("p2", &p2), ("p", &p), ("c", &c)] {
        draw_circle(
            screen_pos[0],
            screen_pos[1],
            3.5,
            Color::from_rgba(31, 119, 180, 255),
        );
        draw_point_label(label, screen_pos);
    }
}

// labels sit above and to the left so they stay clear of the marker
fn draw_point_label(text: &str, screen_pos: &Array1<f32>) {
    let font_size = 16.0;
    let text_size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        screen_pos[0] - text_size.width - 3.0,
        screen_pos[1] - 4.0,
        font_size,
        BLACK,
    );
}
