//! Timeline viewport state.
//!
//! Tracks the visible time window of the demo timeline and keeps it inside
//! the bounds of the data set while zooming and panning.

/// Smallest window the user can zoom into (ms).
const MIN_VISIBLE_MS: i64 = 1_000;

/// Visible time window and its allowed bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Current zoom level (1.0 = full bounds visible)
    zoom_level: f32,
    viewport_start_ms: i64,
    viewport_end_ms: i64,
    min_ms: i64,
    max_ms: i64,
}

impl ViewportState {
    /// Creates a viewport showing all of `min_ms..max_ms`.
    pub fn fit(min_ms: i64, max_ms: i64) -> Self {
        let max_ms = max_ms.max(min_ms + MIN_VISIBLE_MS);
        Self {
            zoom_level: 1.0,
            viewport_start_ms: min_ms,
            viewport_end_ms: max_ms,
            min_ms,
            max_ms,
        }
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    pub fn viewport_start_ms(&self) -> i64 {
        self.viewport_start_ms
    }

    pub fn viewport_end_ms(&self) -> i64 {
        self.viewport_end_ms
    }

    pub fn visible_duration(&self) -> i64 {
        self.viewport_end_ms - self.viewport_start_ms
    }

    /// Shows the full bounds again.
    pub fn reset(&mut self) {
        *self = Self::fit(self.min_ms, self.max_ms);
    }

    /// Zooms in/out around a specific timestamp.
    ///
    /// # Arguments
    /// * `zoom_factor` - Multiplicative zoom factor (>1 = zoom in, <1 = zoom out)
    /// * `focus_ms` - Timestamp that stays at the same screen position
    pub fn zoom_around(&mut self, zoom_factor: f32, focus_ms: i64) {
        let bounds = self.max_ms - self.min_ms;
        let old_duration = self.visible_duration() as f64;
        let new_duration = ((old_duration / zoom_factor as f64) as i64).clamp(MIN_VISIBLE_MS, bounds);

        let focus_ratio = (focus_ms - self.viewport_start_ms) as f64 / old_duration;
        let new_start = focus_ms - (new_duration as f64 * focus_ratio) as i64;

        self.place(new_start, new_duration);
    }

    /// Shifts the window by `delta_ms`, stopping at the bounds.
    pub fn pan_by(&mut self, delta_ms: i64) {
        let duration = self.visible_duration();
        self.place(self.viewport_start_ms + delta_ms, duration);
    }

    fn place(&mut self, start: i64, duration: i64) {
        let start = start.clamp(self.min_ms, self.max_ms - duration);
        self.viewport_start_ms = start;
        self.viewport_end_ms = start + duration;
        self.zoom_level = (self.max_ms - self.min_ms) as f32 / duration as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        let viewport = ViewportState::fit(0, 10_000);
        assert_eq!(viewport.viewport_start_ms(), 0);
        assert_eq!(viewport.viewport_end_ms(), 10_000);
        assert_eq!(viewport.zoom_level(), 1.0);
    }

    #[test]
    fn test_zoom_keeps_focus_position() {
        let mut viewport = ViewportState::fit(0, 10_000);
        viewport.zoom_around(2.0, 5_000);
        assert_eq!(viewport.viewport_start_ms(), 2_500);
        assert_eq!(viewport.viewport_end_ms(), 7_500);
        assert_eq!(viewport.zoom_level(), 2.0);
    }

    #[test]
    fn test_zoom_out_is_bounded() {
        let mut viewport = ViewportState::fit(0, 10_000);
        viewport.zoom_around(0.1, 5_000);
        assert_eq!(viewport.visible_duration(), 10_000);
        assert_eq!(viewport.viewport_start_ms(), 0);
    }

    #[test]
    fn test_zoom_in_is_bounded() {
        let mut viewport = ViewportState::fit(0, 10_000);
        viewport.zoom_around(1_000.0, 0);
        assert_eq!(viewport.visible_duration(), 1_000);
    }

    #[test]
    fn test_pan_clamps_to_bounds() {
        let mut viewport = ViewportState::fit(0, 10_000);
        viewport.zoom_around(2.0, 5_000);

        viewport.pan_by(100_000);
        assert_eq!(viewport.viewport_end_ms(), 10_000);

        viewport.pan_by(-100_000);
        assert_eq!(viewport.viewport_start_ms(), 0);
        assert_eq!(viewport.visible_duration(), 5_000);
    }

    #[test]
    fn test_reset() {
        let mut viewport = ViewportState::fit(0, 10_000);
        viewport.zoom_around(4.0, 1_000);
        viewport.reset();
        assert_eq!(viewport, ViewportState::fit(0, 10_000));
    }
}
