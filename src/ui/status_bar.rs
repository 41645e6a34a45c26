//! Status bar UI rendering
//!
//! Shows the data set size and the visible time window.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_span, format_time_of_day};

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let start_ms = state.viewport.viewport_start_ms();
        let end_ms = state.viewport.viewport_end_ms();
        ui.label(RichText::new(format!(
            "Records: {} | Page {} of {} | Window: {} - {} ({})",
            state.records.len(),
            state.pager.state().page(),
            state.pager.max_page(),
            format_time_of_day(start_ms),
            format_time_of_day(end_ms),
            format_span(end_ms - start_ms),
        )).strong());
    });
}
