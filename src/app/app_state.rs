//! Centralized state for the demo viewer.
//!
//! Composes the synthetic result set, the pager paging through it, the
//! timeline viewport and the persisted preferences.

use anyhow::{Context, Result};
use upwidgets::{PageChange, Pager, PagerConfig};

use super::dataset::{self, DemoRecord};
use super::settings_coordinator::DemoSettings;
use crate::state::ViewportState;

const DATASET_SEED: u64 = 42;
const DEFAULT_RECORD_COUNT: u64 = 237;
/// Upper bound on generated records, whatever the configured total says.
const MAX_RECORD_COUNT: u64 = 100_000;
/// Half of the timeline span around startup time (1 hour).
pub const HALF_WINDOW_MS: i64 = 3_600_000;

/// Main demo state.
pub struct AppState {
    /// Rows being paged through
    pub records: Vec<DemoRecord>,
    /// Pagination over `records`
    pub pager: Pager,
    /// Visible window of the timeline
    pub viewport: ViewportState,
    /// Preferences persisted on exit
    pub settings: DemoSettings,
    /// Error to show in the header (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Builds the state around `now_ms`.
    ///
    /// The record count comes from `config.total`, or a default size when the
    /// configuration leaves it at zero. Counts above `MAX_RECORD_COUNT` are
    /// capped. A stored page size is restored after
    /// the pager is built.
    pub fn new(mut config: PagerConfig, settings: DemoSettings, now_ms: i64) -> Result<Self> {
        if config.total == 0 {
            config.total = DEFAULT_RECORD_COUNT;
        }
        if config.total > MAX_RECORD_COUNT {
            log::warn!(
                "configured total {} exceeds the demo limit, generating {} records",
                config.total,
                MAX_RECORD_COUNT
            );
            config.total = MAX_RECORD_COUNT;
        }
        let records = dataset::generate_records(DATASET_SEED, config.total as usize, now_ms, HALF_WINDOW_MS);

        let mut pager = Pager::new(config, |change: PageChange| {
            log::info!(
                "page changed: page={} take={} skip={}",
                change.page,
                change.take,
                change.skip
            );
        })
        .context("invalid pager configuration")?;

        if let Some(page_size) = settings.page_size {
            pager.change_take_to(page_size);
        }

        Ok(Self {
            records,
            pager,
            viewport: ViewportState::fit(now_ms - HALF_WINDOW_MS, now_ms + HALF_WINDOW_MS),
            settings,
            error_message: None,
        })
    }

    /// Rows on the current page.
    pub fn visible_records(&self) -> &[DemoRecord] {
        let state = self.pager.state();
        let start = (state.skip() as usize).min(self.records.len());
        let end = (start + state.take().get() as usize).min(self.records.len());
        &self.records[start..end]
    }

    /// Records the page size of an emitted change so it is saved on exit.
    pub fn handle_page_change(&mut self, change: PageChange) {
        self.settings.page_size = Some(change.take);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn config_95_by_20() -> PagerConfig {
        PagerConfig::with_total(95).default_take(20).unwrap()
    }

    #[test]
    fn test_visible_records_follow_pager() {
        let mut state = AppState::new(config_95_by_20(), DemoSettings::default(), NOW).unwrap();
        assert_eq!(state.visible_records().len(), 20);
        assert_eq!(state.visible_records()[0].id, 1);

        state.pager.go_to(5);
        let last_page = state.visible_records();
        assert_eq!(last_page.len(), 15);
        assert_eq!(last_page[0].id, 81);
        assert_eq!(last_page[14].id, 95);
    }

    #[test]
    fn test_default_record_count() {
        let state = AppState::new(PagerConfig::default(), DemoSettings::default(), NOW).unwrap();
        assert_eq!(state.records.len(), DEFAULT_RECORD_COUNT as usize);
        assert_eq!(state.pager.total(), DEFAULT_RECORD_COUNT);
    }

    #[test]
    fn test_huge_total_is_capped() {
        let config = PagerConfig::with_total(u64::MAX);
        let state = AppState::new(config, DemoSettings::default(), NOW).unwrap();
        assert_eq!(state.records.len(), MAX_RECORD_COUNT as usize);
        assert_eq!(state.pager.total(), MAX_RECORD_COUNT);
    }

    #[test]
    fn test_stored_page_size_restored() {
        let settings = DemoSettings {
            page_size: Some(50),
            dark_mode: false,
        };
        let state = AppState::new(config_95_by_20(), settings, NOW).unwrap();
        assert_eq!(state.pager.state().take().get(), 50);
        assert_eq!(state.visible_records().len(), 50);
    }

    #[test]
    fn test_page_change_updates_settings() {
        let mut state = AppState::new(config_95_by_20(), DemoSettings::default(), NOW).unwrap();
        let change = state.pager.change_take_to(100).unwrap();
        state.handle_page_change(change);
        assert_eq!(state.settings.page_size, Some(100));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = config_95_by_20().default_page(0);
        assert!(AppState::new(config, DemoSettings::default(), NOW).is_err());
    }

    #[test]
    fn test_viewport_centered_on_now() {
        let state = AppState::new(config_95_by_20(), DemoSettings::default(), NOW).unwrap();
        assert_eq!(state.viewport.viewport_start_ms(), NOW - HALF_WINDOW_MS);
        assert_eq!(state.viewport.viewport_end_ms(), NOW + HALF_WINDOW_MS);
    }
}
