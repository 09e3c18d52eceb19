// SPDX-License-Identifier: MPL-2.0
//! Pagination sub-component: the page cursor and the end-of-results sentinel.
//!
//! All navigation triggers funnel through here with a single set of guards:
//! nothing moves the cursor while a fetch is outstanding, nothing moves it
//! forward once the endpoint has signaled exhaustion, and it never drops
//! below the first page.

use crate::config::defaults::FIRST_PAGE;

/// Pagination sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    page: u32,
    has_more: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            has_more: true,
        }
    }
}

/// Messages for the pagination sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The Next control was activated.
    NextRequested,
    /// The Previous control was activated.
    PreviousRequested,
    /// The scrollable viewport reached the bottom of its content.
    EndReached,
    /// The empty state asked for the current page again.
    ReloadRequested,
    /// A page fetch settled successfully with `count` items.
    PageLoaded { count: usize },
    /// A page fetch settled with an error.
    LoadFailed,
}

/// Effects produced by cursor changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Fetch the given page. When `reset` is set, the accumulated feed must
    /// be cleared before the results arrive (backward navigation rebuilds
    /// the list from scratch).
    FetchPage { page: u32, reset: bool },
}

impl State {
    /// Handle a pagination message.
    ///
    /// `busy` is true while a page fetch is outstanding; every cursor-moving
    /// trigger is ignored for its duration.
    pub fn handle(&mut self, msg: Message, busy: bool) -> Effect {
        match msg {
            Message::NextRequested | Message::EndReached => {
                if busy || !self.has_more {
                    return Effect::None;
                }
                self.page += 1;
                Effect::FetchPage {
                    page: self.page,
                    reset: false,
                }
            }
            Message::PreviousRequested => {
                if busy || self.page <= FIRST_PAGE {
                    return Effect::None;
                }
                self.page -= 1;
                // Pages behind the cursor were non-empty, so the end
                // sentinel no longer applies.
                self.has_more = true;
                Effect::FetchPage {
                    page: self.page,
                    reset: true,
                }
            }
            Message::ReloadRequested => {
                if busy {
                    return Effect::None;
                }
                Effect::FetchPage {
                    page: self.page,
                    reset: false,
                }
            }
            Message::PageLoaded { count } => {
                if count == 0 {
                    self.has_more = false;
                }
                Effect::None
            }
            // The cursor stays where the failed fetch left it so a reload
            // retries the same page.
            Message::LoadFailed => Effect::None,
        }
    }

    /// Current page cursor, always at least the first page.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// False once a fetch has returned zero items for a page at or past the
    /// cursor.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
