//! UI panel rendering subsystem
//!
//! - Header panel (zoom controls, theme toggle)
//! - Results panel (current page rows and the pager)
//! - Timeline panel (time axis, record bars, "now" marker)
//! - Status bar (data set and window summary)

pub mod header;
pub mod results_panel;
pub mod status_bar;
pub mod timeline_panel;
