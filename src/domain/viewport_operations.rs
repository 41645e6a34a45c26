//! Viewport operations for coordinate transformation and tick spacing.
//!
//! This module provides pure functions for:
//! - Converting between millisecond timestamps and screen coordinates
//! - Choosing a readable tick interval for the time axis
//!
//! These functions are stateless and can be tested independently.

/// Tick spacings the time axis snaps to, in milliseconds.
const TICK_STEPS_MS: [i64; 12] = [
    1_000,
    5_000,
    10_000,
    30_000,
    60_000,
    5 * 60_000,
    10 * 60_000,
    15 * 60_000,
    30 * 60_000,
    3_600_000,
    6 * 3_600_000,
    24 * 3_600_000,
];

/// Converts a timestamp to an X coordinate within the canvas rect.
///
/// # Arguments
/// * `time_ms` - The timestamp to convert
/// * `viewport_start` - The start of the visible time range
/// * `viewport_end` - The end of the visible time range
/// * `canvas_rect` - The canvas rectangle for positioning
pub fn time_to_x(
    time_ms: i64,
    viewport_start: i64,
    viewport_end: i64,
    canvas_rect: egui::Rect,
) -> f32 {
    if viewport_end == viewport_start {
        return canvas_rect.left();
    }
    let normalized = (time_ms - viewport_start) as f64 / (viewport_end - viewport_start) as f64;
    canvas_rect.left() + normalized as f32 * canvas_rect.width()
}

/// Converts an X coordinate to a timestamp within the viewport range.
pub fn x_to_time(
    x: f32,
    viewport_start: i64,
    viewport_end: i64,
    canvas_rect: egui::Rect,
) -> i64 {
    let normalized = ((x - canvas_rect.left()) / canvas_rect.width()) as f64;
    viewport_start + (normalized * (viewport_end - viewport_start) as f64) as i64
}

/// Smallest predefined step that yields at most ten ticks over `visible_ms`.
pub fn tick_interval_ms(visible_ms: i64) -> i64 {
    let target = visible_ms / 10;
    TICK_STEPS_MS
        .iter()
        .copied()
        .find(|step| *step >= target)
        .unwrap_or(TICK_STEPS_MS[TICK_STEPS_MS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 0.0), egui::vec2(500.0, 50.0))
    }

    #[test]
    fn test_time_to_x() {
        assert_eq!(time_to_x(1000, 1000, 2000, rect()), 100.0);
        assert_eq!(time_to_x(1500, 1000, 2000, rect()), 350.0);
        assert_eq!(time_to_x(2000, 1000, 2000, rect()), 600.0);
        assert_eq!(time_to_x(1500, 1000, 1000, rect()), 100.0);
    }

    #[test]
    fn test_x_to_time() {
        assert_eq!(x_to_time(350.0, 1000, 2000, rect()), 1500);
        assert_eq!(x_to_time(100.0, 1000, 2000, rect()), 1000);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval_ms(5_000), 1_000);
        assert_eq!(tick_interval_ms(2 * 3_600_000), 15 * 60_000);
        assert_eq!(tick_interval_ms(365 * 24 * 3_600_000), 24 * 3_600_000);
    }
}
