use crate::geometry::params::Params;
use crate::geometry::scene::Scene;
use egui_macroquad::egui;

/// Interaction state shared between the UI panels and the main loop.
#[allow(clippy::struct_excessive_bools)]
pub struct UIState {
    /// Segment currently under the cursor.
    pub hovered_segment: Option<usize>,
    /// Segment pinned by clicking on it.
    pub selected_segment: Option<usize>,
    /// Scatter point currently being dragged.
    pub dragged_point: Option<usize>,
    /// Draw a marker on every segment's closest point.
    pub show_closest_points: bool,
    /// Whether the cursor is over an egui panel, updated once per frame.
    pub pointer_over_ui: bool,
    /// Save the scene on the next frame.
    pub save_requested: bool,
    /// Load the most recent saved scene on the next frame.
    pub load_requested: bool,
    /// Rebuild the scene from the current parameters on the next frame.
    pub regenerate_requested: bool,
    /// Status line shown in the side panel.
    pub status_message: Option<String>,
}

impl UIState {
    /// Creates the initial UI state.
    pub fn new() -> Self {
        Self {
            hovered_segment: None,
            selected_segment: None,
            dragged_point: None,
            show_closest_points: false,
            pointer_over_ui: false,
            save_requested: false,
            load_requested: false,
            regenerate_requested: false,
            status_message: None,
        }
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws all egui panels for the live view.
pub fn draw_ui(state: &mut UIState, scene: &Scene, params: &mut Params) {
    egui_macroquad::ui(|egui_ctx| {
        // Brighter text so the panels read well next to the white canvas
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        // Right-side stats panel
        super::panel::draw_stats_panel(egui_ctx, state, scene, params);

        // Inspector - show selected segment, or hovered if nothing selected
        let display = state.selected_segment.or(state.hovered_segment);
        if let Some(k) = display {
            if k < scene.pairs.len() {
                super::inspector::draw_segment_inspector(
                    egui_ctx,
                    scene,
                    k,
                    state.selected_segment.is_some(),
                );
            } else if state.selected_segment == Some(k) {
                // Selected segment disappeared after a regenerate, clear selection
                state.selected_segment = None;
            }
        }

        state.pointer_over_ui = egui_ctx.is_pointer_over_area();
    });
}

/// Flushes the buffered egui draw commands to the screen.
pub fn process_egui() {
    egui_macroquad::draw();
}
