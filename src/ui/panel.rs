use crate::geometry::params::Params;
use crate::geometry::scene::Scene;
use egui_macroquad::egui;
use rand::Rng;

use super::ui::UIState;

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    scene: &Scene,
    params: &mut Params,
) {
    egui::SidePanel::right("stats_panel")
        .default_width(260.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Scene");
            ui.separator();

            // Save/Load/Regenerate buttons
            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    state.save_requested = true;
                }
                if ui.button("📂 Load").clicked() {
                    state.load_requested = true;
                }
                if ui.button("🔄 Regenerate").clicked() {
                    state.regenerate_requested = true;
                }
            });

            // Show status message if any
            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            let intersecting = scene.intersecting();
            ui.label(format!("Points: {}", scene.points.len()));
            ui.label(format!("Segments: {}", scene.pairs.len()));
            ui.label(
                egui::RichText::new(format!("Intersecting: {}", intersecting))
                    .color(egui::Color32::from_rgb(255, 100, 100)),
            );
            ui.label(format!("Clear: {}", scene.pairs.len() - intersecting));

            ui.separator();

            ui.checkbox(&mut state.show_closest_points, "Show closest points");

            ui.separator();

            // Applied live, the main loop syncs the scene when these change
            ui.label("Circle");
            ui.add(egui::Slider::new(&mut params.circle_radius, 0.0..=3.0).text("Radius"));
            ui.add(egui::Slider::new(&mut params.circle_x, -3.0..=3.0).text("Center X"));
            ui.add(egui::Slider::new(&mut params.circle_y, -3.0..=3.0).text("Center Y"));

            ui.separator();

            // Applied on the next regenerate
            ui.label("Generation");
            ui.add(egui::Slider::new(&mut params.n_points, 3..=60).text("Points"));
            ui.add(egui::Slider::new(&mut params.spread, 0.2..=3.0).text("Spread"));
            ui.horizontal(|ui| {
                ui.label("Seed:");
                ui.add(egui::DragValue::new(&mut params.seed));
                if ui.button("🎲").clicked() {
                    params.seed = rand::rng().random();
                    state.regenerate_requested = true;
                }
            });

            ui.separator();

            ui.label("View");
            ui.add(egui::Slider::new(&mut params.view_extent, 1.0..=10.0).text("Extent"));
            ui.add(egui::Slider::new(&mut params.pick_radius, 0.01..=0.5).text("Pick Radius"));
        });
}
