//! The stateful pager.
//!
//! `Pager` owns a [`PagerState`] and the page-change callback. Each public
//! operation builds a [`PageTransition`], runs it through
//! [`PagerState::apply`], commits the result and only then calls the
//! callback with the values it just computed.

use std::fmt;
use std::num::NonZeroU64;

use super::config::{PagerConfig, TakeOption};
use super::state::{PagerState, ResultRange};
use super::transition::{PageChange, PageTransition};
use crate::error::ConfigError;

type PageChangeCallback = Box<dyn FnMut(PageChange)>;

/// Pagination control: state, configuration and the host callback.
pub struct Pager {
    config: PagerConfig,
    total: u64,
    state: PagerState,
    on_page_change: PageChangeCallback,
}

impl fmt::Debug for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("total", &self.total)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Pager {
    /// Builds a pager from a validated configuration.
    ///
    /// `on_page_change` receives `PageChange { page, take, skip }` after
    /// every transition that changed the state.
    pub fn new(
        config: PagerConfig,
        on_page_change: impl FnMut(PageChange) + 'static,
    ) -> Result<Self, ConfigError> {
        let state = config.validate()?;
        log::debug!(
            "pager created: total={} page={} take={}",
            config.total,
            state.page(),
            state.take()
        );
        Ok(Self {
            total: config.total,
            config,
            state,
            on_page_change: Box::new(on_page_change),
        })
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Updates the item count. The host calls this whenever its result set
    /// changes.
    ///
    /// If the current page no longer exists it moves to the new last page
    /// (page 1 for an empty set), and that move is reported like any other
    /// transition.
    pub fn set_total(&mut self, total: u64) -> Option<PageChange> {
        if total == self.total {
            return None;
        }
        log::debug!("pager total changed: {} -> {}", self.total, total);
        self.total = total;

        let (next, change) = self.state.fit_to_total(total)?;
        log::debug!("pager page {} -> {} after total change", self.state.page(), next.page());
        self.state = next;
        (self.on_page_change)(change);
        Some(change)
    }

    pub fn max_page(&self) -> u64 {
        self.state.max_page(self.total)
    }

    pub fn result_range(&self) -> ResultRange {
        self.state.result_range(self.total)
    }

    /// Text shown in the result counter.
    pub fn summary_text(&self) -> String {
        self.config.summary_text(self.result_range())
    }

    pub fn previous_page(&mut self) -> Option<PageChange> {
        self.dispatch(PageTransition::Previous)
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        self.dispatch(PageTransition::Next)
    }

    pub fn go_to(&mut self, page: u64) -> Option<PageChange> {
        self.dispatch(PageTransition::JumpTo(page))
    }

    pub fn change_take(&mut self, option: TakeOption) -> Option<PageChange> {
        self.dispatch(PageTransition::ChangeTake(option))
    }

    /// Changes the page size to a raw value coming from outside the selector
    /// (restored settings, a query string). Zero is rejected and logged.
    pub fn change_take_to(&mut self, take: u64) -> Option<PageChange> {
        match NonZeroU64::new(take) {
            Some(take) => self.change_take(TakeOption::from_take(take)),
            None => {
                log::warn!("ignoring page size 0");
                None
            }
        }
    }

    /// Applies a transition, commits it and reports it.
    ///
    /// Returns the emitted change, or `None` for a no-op (in which case the
    /// callback is not called).
    pub fn dispatch(&mut self, transition: PageTransition) -> Option<PageChange> {
        let (next, change) = self.state.apply(self.total, &transition)?;
        log::debug!(
            "pager {:?}: page {} -> {}, take {} -> {}",
            transition,
            self.state.page(),
            next.page(),
            self.state.take(),
            next.take()
        );
        self.state = next;
        (self.on_page_change)(change);
        Some(change)
    }
}
