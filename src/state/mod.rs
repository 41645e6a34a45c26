//! State management modules for the demo viewer.
//!
//! - Viewport state (visible time window, zoom level)

mod viewport;

pub use viewport::ViewportState;
