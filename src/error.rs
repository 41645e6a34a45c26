//! Configuration errors for the pager and timeline widgets.
//!
//! Widgets validate their configuration when they are constructed and refuse
//! to build from values that would produce degenerate output (division by a
//! zero page size, empty time windows, negative marker heights).

use thiserror::Error;

/// Reasons a widget configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page size must be greater than zero")]
    ZeroTake,

    #[error("default page must be 1 or greater")]
    ZeroPage,

    #[error("default skip {skip} does not match page {page} with page size {take} (expected {expected})")]
    InconsistentSkip {
        skip: u64,
        page: u64,
        take: u64,
        expected: u64,
    },

    #[error("default page {page} with page size {take} puts the offset past u64::MAX")]
    PageOutOfRange { page: u64, take: u64 },

    #[error("page-size selector is enabled but no page sizes are configured")]
    NoTakes,

    #[error("canvas time window {start}..{end} is empty or reversed")]
    EmptyTimeWindow { start: i64, end: i64 },

    #[error("canvas time window {start}..{end} is too wide to measure")]
    TimeWindowTooWide { start: i64, end: i64 },

    #[error("canvas width must be positive, got {0}")]
    InvalidCanvasWidth(f32),

    #[error("canvas height {height} is smaller than header height {header_height}")]
    HeaderTallerThanCanvas { height: f32, header_height: f32 },

    #[error("invalid pager configuration: {0}")]
    Json(#[from] serde_json::Error),
}
