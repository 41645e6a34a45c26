//! Results panel UI rendering
//!
//! Lists the rows of the current page above the pager.

use eframe::egui;
use crate::app::AppState;
use crate::utils::{format_span, format_time_of_day};

/// Renders the current page of records and the pager below it.
pub fn render_results_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let pager_height = 72.0;
    let table_height = (ui.available_height() - pager_height).max(0.0);

    egui::ScrollArea::vertical()
        .id_salt("results_scroll_area")
        .max_height(table_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("#");
                    ui.strong("Name");
                    ui.strong("Start");
                    ui.strong("Duration");
                    ui.end_row();

                    for record in state.visible_records() {
                        ui.label(record.id.to_string());
                        ui.label(&record.name);
                        ui.label(format_time_of_day(record.timestamp_ms));
                        ui.label(format_span(record.duration_ms));
                        ui.end_row();
                    }
                });
        });

    ui.separator();

    if let Some(change) = state.pager.show(ui) {
        state.handle_page_change(change);
    }
}
