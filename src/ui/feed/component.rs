// SPDX-License-Identifier: MPL-2.0
//! Feed component encapsulating state and update logic.
//!
//! The component owns the accumulated entries and orchestrates the
//! pagination, loading, and error sub-components. It performs no I/O
//! itself: every message is reduced to an [`Effect`] the application root
//! turns into an async task.

use crate::api::CatImage;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::feed::subcomponents::{error_state, loading, pagination};

/// Display state of one entry's pixels.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    /// Bytes are still being downloaded or decoded.
    Pending,
    /// Decoded and ready for display.
    Ready(ImageData),
    /// Download or decode failed; the entry stays in the feed with a
    /// placeholder caption.
    Failed,
}

/// One feed entry: the API descriptor plus its thumbnail slot.
#[derive(Debug, Clone)]
pub struct Entry {
    pub image: CatImage,
    pub thumbnail: Thumbnail,
}

/// A thumbnail download the application should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    /// Position of the entry in the feed.
    pub index: usize,
    pub url: String,
}

/// Messages emitted by feed widgets and settling fetches.
#[derive(Debug, Clone)]
pub enum Message {
    NextPressed,
    PreviousPressed,
    /// The empty state asked for the current page again.
    ReloadPressed,
    /// The scrollable reported a new offset; `at_bottom` is true when the
    /// viewport touches the end of the content.
    Scrolled { at_bottom: bool },
    PageLoaded(Result<Vec<CatImage>, Error>),
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Periodic animation tick, only delivered while loading.
    Tick,
}

/// Side effects the application should perform after handling a feed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch the given page of the feed.
    FetchPage(u32),
    /// Download the bytes behind freshly appended entries.
    FetchThumbnails(Vec<ThumbnailRequest>),
}

/// Complete feed component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    entries: Vec<Entry>,
    pagination: pagination::State,
    loading: loading::State,
    error: Option<error_state::State>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kicks off the initial fetch of the first page. Called once on
    /// startup, before the first render.
    pub fn start(&mut self) -> Effect {
        self.loading.handle(loading::Message::Started);
        Effect::FetchPage(self.pagination.page())
    }

    /// Handle a feed message, returning the effect the application should
    /// perform.
    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> Effect {
        match message {
            Message::NextPressed => self.drive_pagination(pagination::Message::NextRequested),
            Message::PreviousPressed => {
                self.drive_pagination(pagination::Message::PreviousRequested)
            }
            Message::ReloadPressed => self.drive_pagination(pagination::Message::ReloadRequested),
            Message::Scrolled { at_bottom } => {
                if at_bottom {
                    self.drive_pagination(pagination::Message::EndReached)
                } else {
                    Effect::None
                }
            }
            Message::PageLoaded(Ok(images)) => {
                self.loading.handle(loading::Message::Finished);
                self.pagination.handle(
                    pagination::Message::PageLoaded {
                        count: images.len(),
                    },
                    false,
                );
                // Any previously shown failure is obsolete once a fetch
                // succeeds.
                self.error = None;

                if images.is_empty() {
                    return Effect::None;
                }

                let base = self.entries.len();
                let requests = images
                    .iter()
                    .enumerate()
                    .map(|(offset, image)| ThumbnailRequest {
                        index: base + offset,
                        url: image.url.clone(),
                    })
                    .collect();
                self.entries.extend(images.into_iter().map(|image| Entry {
                    image,
                    thumbnail: Thumbnail::Pending,
                }));

                Effect::FetchThumbnails(requests)
            }
            Message::PageLoaded(Err(error)) => {
                self.loading.handle(loading::Message::Finished);
                self.pagination.handle(pagination::Message::LoadFailed, false);
                self.error = Some(error_state::State::new(
                    error.i18n_key(),
                    error.to_string(),
                    i18n,
                ));
                Effect::None
            }
            Message::ThumbnailLoaded { index, result } => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.thumbnail = match result {
                        Ok(data) => Thumbnail::Ready(data),
                        Err(_) => Thumbnail::Failed,
                    };
                }
                Effect::None
            }
            Message::Tick => {
                if self.loading.handle(loading::Message::Tick) == loading::Effect::TimedOut {
                    self.error = Some(error_state::State::new(
                        "feed-error-timeout",
                        String::new(),
                        i18n,
                    ));
                }
                Effect::None
            }
        }
    }

    fn drive_pagination(&mut self, message: pagination::Message) -> Effect {
        let busy = self.loading.is_loading();
        match self.pagination.handle(message, busy) {
            pagination::Effect::None => Effect::None,
            pagination::Effect::FetchPage { page, reset } => {
                if reset {
                    self.entries.clear();
                }
                self.loading.handle(loading::Message::Started);
                Effect::FetchPage(page)
            }
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    /// The error currently shown inline, if any.
    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        self.error.as_ref()
    }

    /// True when the empty state should be rendered instead of the list.
    #[must_use]
    pub fn shows_empty_state(&self) -> bool {
        self.entries.is_empty() && !self.is_loading()
    }

    /// Whether the Previous control accepts input.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.page() > crate::config::defaults::FIRST_PAGE && !self.is_loading()
    }

    /// Whether the Next control accepts input.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.has_more() && !self.is_loading()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.loading.spinner_rotation()
    }
}
