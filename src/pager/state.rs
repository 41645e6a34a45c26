//! Pager state and its transition function.
//!
//! `PagerState` is a plain value: every transition goes through
//! [`PagerState::apply`], which returns the next state together with the
//! event to report, or `None` when the transition is a no-op. Nothing here
//! touches the UI, so the arithmetic can be tested on its own.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use super::transition::{PageChange, PageTransition};

/// Number of pages needed to show `total` items, `take` at a time.
pub fn max_page(total: u64, take: NonZeroU64) -> u64 {
    total.div_ceil(take.get())
}

/// Position of the current page inside the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultRange {
    /// The result set is empty.
    NoResults,
    /// Items `from..=to` (1-indexed) out of `total` are on screen.
    Range { from: u64, to: u64, total: u64 },
}

/// Current page, offset and page size.
///
/// Invariants:
/// - `page >= 1`
/// - `skip == (page - 1) * take`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerState {
    page: u64,
    skip: u64,
    take: NonZeroU64,
}

impl PagerState {
    /// Creates a state on the first page.
    pub fn first(take: NonZeroU64) -> Self {
        Self::at_page(1, take)
    }

    /// Creates a state on `page`, deriving the offset. Page 0 is treated as page 1.
    pub fn at_page(page: u64, take: NonZeroU64) -> Self {
        let page = page.max(1);
        Self {
            page,
            skip: offset_of(page, take),
            take,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn take(&self) -> NonZeroU64 {
        self.take
    }

    /// Page count for `total` items at the current page size.
    pub fn max_page(&self, total: u64) -> u64 {
        max_page(total, self.take)
    }

    /// Whether "previous" has nowhere to go.
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether "next" has nowhere to go. Always true for an empty result set.
    pub fn is_last_page(&self, total: u64) -> bool {
        self.page >= self.max_page(total)
    }

    /// Range of items shown on the current page.
    ///
    /// `to` is clamped to `total`, so the last page of 95 items at 20 per
    /// page reads `81..=95`, not `81..=100`.
    pub fn result_range(&self, total: u64) -> ResultRange {
        if self.max_page(total) == 0 {
            return ResultRange::NoResults;
        }
        let from = self.skip + 1;
        let to = self.skip.saturating_add(self.take.get()).min(total);
        ResultRange::Range { from, to, total }
    }

    /// The event describing this state.
    pub fn as_change(&self) -> PageChange {
        PageChange {
            page: self.page,
            take: self.take.get(),
            skip: self.skip,
        }
    }

    /// Applies a transition against a result set of `total` items.
    ///
    /// Returns the next state and the event to emit, or `None` if the
    /// transition leaves the state untouched and must not be reported.
    pub fn apply(self, total: u64, transition: &PageTransition) -> Option<(PagerState, PageChange)> {
        let next = match transition {
            PageTransition::Previous => {
                if self.is_first_page() {
                    return None;
                }
                Self::at_page(self.page - 1, self.take)
            }
            PageTransition::Next => {
                if self.is_last_page(total) {
                    return None;
                }
                Self::at_page(self.page + 1, self.take)
            }
            PageTransition::JumpTo(requested) => {
                let last = self.max_page(total);
                if last == 0 {
                    return None;
                }
                Self::at_page((*requested).clamp(1, last), self.take)
            }
            PageTransition::ChangeTake(option) => {
                let new_take = option.id();
                if new_take == self.take {
                    return None;
                }
                self.resized(total, new_take)
            }
        };
        Some((next, next.as_change()))
    }

    /// Pulls the page back onto the last one after the result set shrank.
    ///
    /// Returns `None` while the current page still exists. An empty result
    /// set lands on page 1.
    pub fn fit_to_total(self, total: u64) -> Option<(PagerState, PageChange)> {
        let last = self.max_page(total).max(1);
        if self.page <= last {
            return None;
        }
        let next = Self::at_page(last, self.take);
        Some((next, next.as_change()))
    }

    /// Keeps the page number across a page-size change, snapping to the new
    /// last page when the old number no longer exists.
    fn resized(&self, total: u64, new_take: NonZeroU64) -> Self {
        let mut new_skip = offset_of(self.page, new_take);
        let mut new_page = new_skip / new_take.get() + 1;

        let last = max_page(total, new_take);
        if new_page > last {
            new_page = last.max(1);
            new_skip = offset_of(new_page, new_take);
        }

        Self {
            page: new_page,
            skip: new_skip,
            take: new_take,
        }
    }
}

fn offset_of(page: u64, take: NonZeroU64) -> u64 {
    page.saturating_sub(1).saturating_mul(take.get())
}
