//! Record bars on the timeline canvas.
//!
//! Every record is drawn as a short bar from its timestamp to its end; rows
//! on the pager's current page are highlighted and labelled.

use eframe::egui;
use upwidgets::{with_alpha, WidgetPalette};

use crate::app::DemoRecord;
use crate::domain::viewport_operations;

const BAR_HEIGHT: f32 = 6.0;
const LANE_GAP: f32 = 2.0;

/// Renders the records whose span intersects the viewport.
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas body (below the header)
/// * `body_rect` - Area available for bars
/// * `records` - All records, sorted by timestamp
/// * `highlighted` - Id range of the current page
/// * `palette` - Colors for normal and highlighted bars
pub fn render_record_markers(
    painter: &egui::Painter,
    body_rect: egui::Rect,
    viewport_start_ms: i64,
    viewport_end_ms: i64,
    records: &[DemoRecord],
    highlighted: std::ops::RangeInclusive<u64>,
    palette: &WidgetPalette,
) {
    let lanes = ((body_rect.height() / (BAR_HEIGHT + LANE_GAP)).floor() as usize).max(1);

    for record in records {
        let end_ms = record.timestamp_ms + record.duration_ms;
        if end_ms < viewport_start_ms || record.timestamp_ms > viewport_end_ms {
            continue;
        }

        let lane = (record.id as usize) % lanes;
        let top = body_rect.top() + lane as f32 * (BAR_HEIGHT + LANE_GAP);
        let left = viewport_operations::time_to_x(record.timestamp_ms, viewport_start_ms, viewport_end_ms, body_rect);
        let right = viewport_operations::time_to_x(end_ms, viewport_start_ms, viewport_end_ms, body_rect)
            .max(left + 1.0);
        let bar = egui::Rect::from_min_max(egui::pos2(left, top), egui::pos2(right, top + BAR_HEIGHT));

        if highlighted.contains(&record.id) {
            painter.rect_filled(bar, 1.0, palette.active_background);
            painter.text(
                egui::pos2(right + 4.0, top + BAR_HEIGHT / 2.0),
                egui::Align2::LEFT_CENTER,
                &record.name,
                egui::FontId::proportional(9.0),
                palette.link_text,
            );
        } else {
            painter.rect_filled(bar, 1.0, with_alpha(palette.disabled_text, 120));
        }
    }
}
