//! upwidgets demo application
//!
//! Shows both widgets in an eframe window:
//! - a seeded synthetic result set paged through the pager
//! - a zoomable timeline with the "now" marker following the wall clock
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, data set, configuration and settings
//! - `domain/` - Coordinate transformations for the timeline
//! - `state/` - Viewport state
//! - `rendering/` - Time axis and record bars
//! - `ui/` - Panel rendering
//! - `utils/` - Formatting helpers
//!
//! Usage: `upwidgets-demo [pager-config.json]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use upwidgets::{Clock, PagerConfig, SystemClock};

mod app;
mod domain;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, SettingsCoordinator};

fn main() -> eframe::Result {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("upwidgets demo"),
        ..Default::default()
    };

    eframe::run_native(
        "upwidgets demo",
        options,
        Box::new(move |cc| {
            let app = DemoApp::new(cc, config_path.as_deref())?;
            Ok(Box::new(app))
        }),
    )
}

/// The demo application; rendering is delegated to the `ui` panels.
struct DemoApp {
    state: AppState,
}

impl DemoApp {
    /// Builds the app, restoring preferences from persistent storage.
    ///
    /// A config file that cannot be loaded is reported in the header and the
    /// default configuration is used instead.
    fn new(cc: &eframe::CreationContext, config_path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        let settings = SettingsCoordinator::load_demo_settings(cc.storage);

        let (config, error_message) = match config_path {
            Some(path) => match app::load_pager_config(path) {
                Ok(config) => (config, None),
                Err(err) => {
                    log::error!("{:#}", err);
                    (PagerConfig::default(), Some(format!("{:#}", err)))
                }
            },
            None => (PagerConfig::default(), None),
        };

        let mut state = AppState::new(config, settings, SystemClock.now_ms())?;
        state.error_message = error_message;
        Ok(Self { state })
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let visuals = if self.state.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for DemoApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_demo_settings(storage, &self.state.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::header::render_header(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::status_bar::render_status_bar(ui, &self.state);
        });

        egui::SidePanel::left("results_panel")
            .resizable(true)
            .default_width(460.0)
            .show(ctx, |ui| {
                ui::results_panel::render_results_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::timeline_panel::render_timeline_panel(ui, &mut self.state);
        });
    }
}
