//! Utility modules for the demo viewer.

pub mod formatting;

pub use formatting::{format_span, format_time_of_day};
