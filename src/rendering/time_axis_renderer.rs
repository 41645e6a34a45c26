//! Time axis rendering logic
//!
//! Draws the header band of the timeline: major ticks with wall-clock labels
//! and minor ticks in between.

use eframe::egui;
use crate::domain::viewport_operations;
use crate::utils::format_time_of_day;

/// Renders the time axis with major and minor tick marks and time-of-day labels
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `axis_rect` - The header band to draw in
/// * `viewport_start_ms` - Start of the visible time range
/// * `viewport_end_ms` - End of the visible time range
pub fn render_time_axis(
    ui: &egui::Ui,
    axis_rect: egui::Rect,
    viewport_start_ms: i64,
    viewport_end_ms: i64,
) {
    let painter = ui.painter_at(axis_rect);
    painter.rect_filled(axis_rect, 0.0, ui.visuals().extreme_bg_color);

    let visible_range = viewport_end_ms - viewport_start_ms;
    if visible_range <= 0 {
        return;
    }

    let tick_interval = viewport_operations::tick_interval_ms(visible_range);
    let mut tick_ms = viewport_start_ms.div_euclid(tick_interval) * tick_interval;

    while tick_ms <= viewport_end_ms {
        let x = viewport_operations::time_to_x(tick_ms, viewport_start_ms, viewport_end_ms, axis_rect);

        painter.line_segment(
            [
                egui::pos2(x, axis_rect.top()),
                egui::pos2(x, axis_rect.top() + 8.0),
            ],
            egui::Stroke::new(2.0, ui.visuals().text_color()),
        );

        painter.text(
            egui::pos2(x, axis_rect.top() + 12.0),
            egui::Align2::CENTER_TOP,
            format_time_of_day(tick_ms),
            egui::FontId::proportional(10.0),
            ui.visuals().text_color(),
        );

        for i in 1..5 {
            let minor_ms = tick_ms + (tick_interval * i) / 5;
            if minor_ms > viewport_end_ms {
                break;
            }
            let minor_x = viewport_operations::time_to_x(minor_ms, viewport_start_ms, viewport_end_ms, axis_rect);
            painter.line_segment(
                [
                    egui::pos2(minor_x, axis_rect.top()),
                    egui::pos2(minor_x, axis_rect.top() + 4.0),
                ],
                egui::Stroke::new(1.0, ui.visuals().text_color().gamma_multiply(0.5)),
            );
        }

        tick_ms += tick_interval;
    }
}
