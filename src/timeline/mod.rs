//! Timeline overlays.
//!
//! - `clock` - time sources (wall clock, fixed instant)
//! - `today_line` - the vertical marker at the current time

mod clock;
mod today_line;

pub use clock::{Clock, FixedClock, SystemClock};
pub use today_line::{marker_geometry, MarkerGeometry, TodayLine, TodayLineProps};
