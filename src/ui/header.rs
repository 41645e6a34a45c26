//! Header panel UI rendering
//!
//! Zoom controls for the timeline and the light/dark toggle.

use eframe::egui;
use egui::Color32;
use crate::app::AppState;

/// Renders the top bar.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("upwidgets");
        ui.separator();

        let center = (state.viewport.viewport_start_ms() + state.viewport.viewport_end_ms()) / 2;
        if ui.button("🔍+").clicked() {
            state.viewport.zoom_around(1.5, center);
        }
        if ui.button("🔍-").clicked() {
            state.viewport.zoom_around(1.0 / 1.5, center);
        }
        if ui.button("⛶ Fit").clicked() {
            state.viewport.reset();
        }
        ui.label(format!("Zoom: {:.1}x", state.viewport.zoom_level()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut dark_mode = state.settings.dark_mode;
            if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                state.settings.dark_mode = dark_mode;
                ui.ctx().request_repaint();
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }
}
