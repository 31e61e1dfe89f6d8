use crate::geometry::scene::Scene;
use crate::geometry::solver;
use egui_macroquad::egui;
use egui_plot::{HLine, Line, Plot, PlotPoints, Points};

const CURVE_SAMPLES: usize = 64;

pub(super) fn draw_segment_inspector(
    egui_ctx: &egui::Context,
    scene: &Scene,
    k: usize,
    is_selected: bool,
) {
    let Some(segment) = scene.segment(k) else {
        return;
    };
    let hit = &scene.hits[k];

    let title = if is_selected {
        format!("Segment #{} [SELECTED]", k)
    } else {
        format!("Segment #{} (hover)", k)
    };

    egui::Window::new(title)
        .default_pos([20.0, 20.0])
        .resizable(true)
        .show(egui_ctx, |ui| {
            if is_selected {
                ui.label("Click elsewhere to deselect");
                ui.separator();
            }
            ui.label(format!("p1: ({:.3}, {:.3})", segment.p1[0], segment.p1[1]));
            ui.label(format!("p2: ({:.3}, {:.3})", segment.p2[0], segment.p2[1]));
            ui.label(format!("Length: {:.3}", segment.length()));

            ui.separator();

            ui.label(format!(
                "Closest point: ({:.3}, {:.3})",
                hit.pos[0], hit.pos[1]
            ));
            ui.label(format!("Parameter r: {:.3}", hit.r));
            ui.label(format!("Distance to center: {:.3}", hit.distance));
            if hit.intersects {
                ui.label(
                    egui::RichText::new("Intersects the circle")
                        .color(egui::Color32::from_rgb(255, 100, 100)),
                );
            } else {
                ui.label(
                    egui::RichText::new("Clear of the circle")
                        .color(egui::Color32::from_rgb(180, 180, 180)),
                );
            }

            ui.separator();

            // Distance to the circle center over the whole segment, with a
            // marker at the solved minimum
            ui.heading("Distance Along Segment");
            draw_distance_plot(ui, scene, k);
        });
}

fn draw_distance_plot(ui: &mut egui::Ui, scene: &Scene, k: usize) {
    let Some(segment) = scene.segment(k) else {
        return;
    };
    let hit = &scene.hits[k];
    let center = &scene.circle.pos;

    let curve: PlotPoints = (0..=CURVE_SAMPLES)
        .map(|i| {
            let r = i as f32 / CURVE_SAMPLES as f32;
            let d = solver::distance(&segment.point_at(r), center);
            [r as f64, d as f64]
        })
        .collect();

    let line = Line::new(curve)
        .color(egui::Color32::from_rgb(100, 150, 255))
        .name("distance");

    let closest: PlotPoints = vec![[hit.r as f64, hit.distance as f64]].into();
    let marker = Points::new(closest)
        .radius(4.0)
        .color(egui::Color32::from_rgb(255, 200, 100))
        .name("closest");

    let radius_line = HLine::new(scene.circle.radius as f64)
        .color(egui::Color32::from_rgb(255, 100, 100))
        .name("radius");

    Plot::new("distance_plot")
        .height(150.0)
        .show_axes([true, true])
        .include_y(0.0)
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| format!("{}: r={:.2}, d={:.2}", name, value.x, value.y))
        .show(ui, |plot_ui| {
            plot_ui.hline(radius_line);
            plot_ui.line(line);
            plot_ui.points(marker);
        });
}
