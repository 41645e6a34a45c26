//! Timeline panel UI rendering
//!
//! Time axis, record bars and the "now" marker. Scrolling zooms around the
//! pointer and dragging pans the window.

use std::time::Duration;

use eframe::egui;
use upwidgets::{TodayLine, TodayLineProps, WidgetPalette};

use crate::app::AppState;
use crate::domain::viewport_operations;
use crate::rendering::{record_markers, time_axis_renderer};

const HEADER_HEIGHT: f32 = 24.0;
const MIN_BODY_HEIGHT: f32 = 40.0;
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Renders the timeline panel filling the available space.
pub fn render_timeline_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let size = egui::vec2(
        ui.available_width(),
        ui.available_height().max(HEADER_HEIGHT + MIN_BODY_HEIGHT),
    );
    let (canvas_rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

    handle_timeline_input(ui, canvas_rect, &response, state);

    let start_ms = state.viewport.viewport_start_ms();
    let end_ms = state.viewport.viewport_end_ms();
    let palette = WidgetPalette::for_visuals(ui.visuals());

    let header_rect = egui::Rect::from_min_size(canvas_rect.min, egui::vec2(canvas_rect.width(), HEADER_HEIGHT));
    time_axis_renderer::render_time_axis(ui, header_rect, start_ms, end_ms);

    let body_rect = egui::Rect::from_min_max(
        egui::pos2(canvas_rect.left(), header_rect.bottom() + 4.0),
        canvas_rect.max,
    );
    let pager_state = state.pager.state();
    let first_id = pager_state.skip() + 1;
    let last_id = pager_state.skip() + pager_state.take().get();
    record_markers::render_record_markers(
        &ui.painter_at(body_rect),
        body_rect,
        start_ms,
        end_ms,
        &state.records,
        first_id..=last_id,
        &palette,
    );

    let props = TodayLineProps {
        canvas_time_start: start_ms,
        canvas_time_end: end_ms,
        canvas_width: canvas_rect.width(),
        header_height: HEADER_HEIGHT,
        height: canvas_rect.height(),
    };
    match TodayLine::new(props) {
        Ok(line) => {
            line.with_tick(TICK_INTERVAL)
                .with_stroke(egui::Stroke::new(2.0, palette.today_line))
                .paint(&ui.painter_at(canvas_rect), canvas_rect);
        }
        Err(err) => log::warn!("today line skipped: {}", err),
    }
}

/// Scroll wheel zooms around the hovered time, drag pans.
fn handle_timeline_input(
    ui: &egui::Ui,
    canvas_rect: egui::Rect,
    response: &egui::Response,
    state: &mut AppState,
) {
    let start_ms = state.viewport.viewport_start_ms();
    let end_ms = state.viewport.viewport_end_ms();

    if let Some(hover_pos) = response.hover_pos() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let focus_ms = viewport_operations::x_to_time(hover_pos.x, start_ms, end_ms, canvas_rect);
            let factor = (1.0 + scroll * 0.002).clamp(0.5, 2.0);
            state.viewport.zoom_around(factor, focus_ms);
        }
    }

    let drag_x = response.drag_delta().x;
    if drag_x != 0.0 && canvas_rect.width() > 0.0 {
        let ms_per_px = (end_ms - start_ms) as f32 / canvas_rect.width();
        state.viewport.pan_by((-drag_x * ms_per_px) as i64);
    }
}
