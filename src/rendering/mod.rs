//! Low-level rendering for the demo timeline.

pub mod record_markers;
pub mod time_axis_renderer;
