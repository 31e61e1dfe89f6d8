use crate::geometry::params::Params;
use egui_macroquad::egui;
use macroquad::prelude::{clear_background, LIGHTGRAY};
use rand::Rng;

/// Draws the configuration screen shown before the demo starts.
///
/// Returns `true` once the user clicks start.
pub fn draw_genesis_screen(params: &mut Params) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_demo = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Segment Scene - Configuration");
                ui.add_space(10.0);

                ui.collapsing("Scatter Points", |ui| {
                    ui.add(egui::Slider::new(&mut params.n_points, 3..=60).text("Points"));
                    ui.add(egui::Slider::new(&mut params.spread, 0.2..=3.0).text("Spread"));
                    ui.horizontal(|ui| {
                        ui.label("Seed:");
                        ui.add(egui::DragValue::new(&mut params.seed));
                        if ui.button("🎲 Randomize").clicked() {
                            params.seed = rand::rng().random();
                        }
                    });
                });

                ui.collapsing("Circle", |ui| {
                    ui.add(egui::Slider::new(&mut params.circle_x, -3.0..=3.0).text("Center X"));
                    ui.add(egui::Slider::new(&mut params.circle_y, -3.0..=3.0).text("Center Y"));
                    ui.add(egui::Slider::new(&mut params.circle_radius, 0.0..=3.0).text("Radius"));
                });

                ui.collapsing("View", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.view_extent, 1.0..=10.0).text("View Extent"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.pick_radius, 0.01..=0.5).text("Pick Radius"),
                    );
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Start Demo").clicked() {
                        start_demo = true;
                    }
                    ui.label("Configure the scene above, then click to start");
                });
            });
        });
    });

    egui_macroquad::draw();

    start_demo
}
