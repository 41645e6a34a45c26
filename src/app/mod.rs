//! Application-level modules for the demo viewer.
//!
//! Holds the centralized state, the synthetic data set, configuration
//! loading and settings persistence.

mod app_state;
mod config_loader;
mod dataset;
mod settings_coordinator;

pub use app_state::AppState;
pub use config_loader::load_pager_config;
pub use dataset::DemoRecord;
pub use settings_coordinator::{DemoSettings, SettingsCoordinator};
