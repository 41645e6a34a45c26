//! Pagination control.
//!
//! - `state` - page/offset arithmetic and the pure transition function
//! - `transition` - transition requests and the emitted change event
//! - `config` - construction-time settings and page-size options
//! - `controller` - the stateful `Pager` holding the host callback
//! - `widget` - egui rendering

mod config;
mod controller;
mod state;
mod transition;
mod widget;

pub use config::{PagerConfig, TakeOption, DEFAULT_TAKES};
pub use controller::Pager;
pub use state::{max_page, PagerState, ResultRange};
pub use transition::{PageChange, PageTransition};
pub use widget::PagerResponse;
