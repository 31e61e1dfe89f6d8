use macroquad::prelude::*;

use secant::geometry::params::Params;
use secant::geometry::scene::Scene;
use secant::graphics;
use secant::ui;

#[macroquad::main("Segment Scene")]
async fn main() {
    let mut genesis = true;

    let mut params = Params::default();
    let mut scene: Option<Scene> = None;
    let mut ui_state = ui::UIState::new();

    println!("Starting segment scene demo");

    loop {
        if genesis {
            if ui::draw_genesis_screen(&mut params) {
                genesis = false;

                scene = Some(Scene::new(&params));
                ui_state = ui::UIState::new();
            }
            next_frame().await;
            continue;
        }

        clear_background(WHITE);

        if let Some(ref mut scene) = scene {
            // the panel sliders may have moved the circle since last frame
            if scene.circle != params.circle() {
                scene.set_circle(params.circle());
            }

            handle_input(scene, &params, &mut ui_state);

            graphics::draw_scene(scene, &params);
            if ui_state.show_closest_points {
                graphics::draw_closest_points(scene, &params);
            }
            if let Some(k) = ui_state.selected_segment.or(ui_state.hovered_segment) {
                graphics::draw_annotation(scene, k, &params);
            }

            ui::draw_ui(&mut ui_state, scene, &mut params);
            handle_requests(scene, &mut params, &mut ui_state);
        }

        ui::process_egui();
        next_frame().await;
    }
}

fn handle_input(scene: &mut Scene, params: &Params, ui_state: &mut ui::UIState) {
    if is_key_pressed(KeyCode::Escape) {
        ui_state.selected_segment = None;
    }

    // ignore the canvas while the cursor is over an egui panel
    if ui_state.pointer_over_ui && ui_state.dragged_point.is_none() {
        ui_state.hovered_segment = None;
        return;
    }

    let world = graphics::screen_to_world(mouse_position(), params);

    // an active drag follows the cursor until the button is released
    if let Some(idx) = ui_state.dragged_point {
        ui_state.hovered_segment = None;
        if is_mouse_button_down(MouseButton::Left) {
            scene.move_point(idx, world);
        } else {
            ui_state.dragged_point = None;
        }
        return;
    }

    ui_state.hovered_segment = scene
        .nearest_segment(&world, params.pick_radius)
        .map(|(_, k)| k);

    if is_mouse_button_pressed(MouseButton::Left) {
        // grabbing a scatter point wins over selecting a segment
        if let Some((_, idx)) = scene.nearest_point(&world, params.pick_radius) {
            ui_state.dragged_point = Some(idx);
            ui_state.selected_segment = None;
        } else if let Some(k) = ui_state.hovered_segment {
            ui_state.selected_segment = Some(k);
        } else {
            ui_state.selected_segment = None;
        }
    }
}

fn handle_requests(scene: &mut Scene, params: &mut Params, ui_state: &mut ui::UIState) {
    if ui_state.save_requested {
        ui_state.save_requested = false;
        let path = format!("scene_{}.json", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        match scene.save_to_file(&path) {
            Ok(()) => {
                println!("Scene saved to {}", path);
                ui_state.status_message = Some(format!("Saved {}", path));
            }
            Err(e) => {
                println!("Save failed: {}", e);
                ui_state.status_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    if ui_state.load_requested {
        ui_state.load_requested = false;
        if let Some(path) = latest_save() {
            match Scene::load_from_file(&path) {
                Ok(loaded) => {
                    println!("Scene loaded from {}", path);
                    params.set_circle(&loaded.circle);
                    *scene = loaded;
                    ui_state.hovered_segment = None;
                    ui_state.selected_segment = None;
                    ui_state.dragged_point = None;
                    ui_state.status_message = Some(format!("Loaded {}", path));
                }
                Err(e) => {
                    println!("Load failed: {}", e);
                    ui_state.status_message = Some(format!("Load failed: {}", e));
                }
            }
        } else {
            ui_state.status_message = Some("No saved scene found".to_string());
        }
    }

    if ui_state.regenerate_requested {
        ui_state.regenerate_requested = false;
        *scene = Scene::new(params);
        ui_state.hovered_segment = None;
        ui_state.selected_segment = None;
        ui_state.dragged_point = None;
        ui_state.status_message = Some(format!("Regenerated with seed {}", params.seed));
    }
}

// timestamped save names sort lexicographically, so the maximum is the newest
fn latest_save() -> Option<String> {
    let entries = std::fs::read_dir(".").ok()?;
    entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with("scene_") && name.ends_with(".json"))
        .max()
}
