pub mod error;
pub mod pager;
pub mod theme;
pub mod timeline;

// Export errors
pub use error::ConfigError;

// Export pager
pub use pager::{
    max_page, PageChange, PageTransition, Pager, PagerConfig, PagerResponse,
    PagerState, ResultRange, TakeOption, DEFAULT_TAKES
};

// Export timeline marker
pub use timeline::{
    marker_geometry, Clock, FixedClock, MarkerGeometry, SystemClock,
    TodayLine, TodayLineProps
};

// Export theme support
pub use theme::{WidgetPalette, hex_to_color32, adjust_brightness, with_alpha};
