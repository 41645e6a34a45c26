//! Pager transitions and the event emitted when one takes effect.

use serde::{Deserialize, Serialize};

use super::config::TakeOption;

/// A user-driven change request for the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTransition {
    /// Step back one page.
    Previous,
    /// Step forward one page.
    Next,
    /// Jump straight to a 1-indexed page.
    JumpTo(u64),
    /// Switch to another page size from the selector.
    ChangeTake(TakeOption),
}

/// Values reported to the host after a transition, in the order
/// `(page, take, skip)` of the page-change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageChange {
    pub page: u64,
    pub take: u64,
    pub skip: u64,
}

impl PageChange {
    /// Returns the change as a `(page, take, skip)` tuple.
    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.page, self.take, self.skip)
    }
}
