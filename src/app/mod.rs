// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the feed component.
//!
//! The `App` struct wires together the feed, localization, and persisted
//! preferences, and translates feed effects into side effects like HTTP
//! fetches. Policy decisions (window sizing, theme resolution, subscription
//! gating) stay close to the main update loop so user-facing behavior is
//! easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::feed;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the feed, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    api: api::Client,
    feed: feed::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.feed.page())
            .field("entries", &self.feed.entries().len())
            .field("loading", &self.feed.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            api: api::Client::from_config(&config)
                .expect("failed to initialize HTTP client"),
            feed: feed::State::new(),
            theme_mode: config.theme_mode,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the fetch of the first
    /// page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let api = api::Client::from_config(&config)
            .expect("failed to initialize HTTP client");

        let mut app = App {
            i18n,
            api,
            feed: feed::State::new(),
            theme_mode: config.theme_mode,
        };

        let effect = app.feed.start();
        let task = update::run_effect(&app.api, effect);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.feed.is_loading()),
            subscription::create_event_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(feed_message) => update::handle_feed_message(self, feed_message),
            Message::Tick(_instant) => update::handle_feed_message(self, feed::Message::Tick),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            feed: &self.feed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CatImage;
    use crate::error::Error;
    use std::sync::{Mutex, OnceLock};
    use std::time::Instant;
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn english_app() -> App {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().expect("valid locale"));
        app
    }

    fn sample_page(count: usize) -> Vec<CatImage> {
        (0..count)
            .map(|n| CatImage {
                id: format!("cat-{n}"),
                url: format!("https://cdn.example.com/cat-{n}.jpg"),
                width: Some(640),
                height: Some(480),
            })
            .collect()
    }

    #[test]
    fn new_starts_loading_the_first_page() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(app.feed.is_loading());
            assert_eq!(app.feed.page(), 1);
            assert!(app.feed.entries().is_empty());
        });
    }

    #[test]
    fn startup_fetch_of_five_items_fills_the_first_page() {
        let mut app = english_app();
        let _ = app.feed.start();

        let _ = app.update(Message::Feed(feed::Message::PageLoaded(Ok(sample_page(5)))));

        assert_eq!(app.feed.entries().len(), 5);
        assert_eq!(app.feed.page(), 1);
        assert!(app.feed.has_more());
        assert!(!app.feed.is_loading());
    }

    #[test]
    fn next_three_times_accumulates_four_pages() {
        let mut app = english_app();
        let _ = app.feed.start();
        let _ = app.update(Message::Feed(feed::Message::PageLoaded(Ok(sample_page(5)))));

        for _ in 0..3 {
            let _ = app.update(Message::Feed(feed::Message::NextPressed));
            assert!(app.feed.is_loading());
            let _ = app.update(Message::Feed(feed::Message::PageLoaded(Ok(sample_page(5)))));
        }

        assert_eq!(app.feed.page(), 4);
        assert_eq!(app.feed.entries().len(), 20);
    }

    #[test]
    fn empty_page_disables_forward_navigation() {
        let mut app = english_app();
        let _ = app.feed.start();
        let _ = app.update(Message::Feed(feed::Message::PageLoaded(Ok(vec![]))));

        assert!(!app.feed.has_more());

        let _ = app.update(Message::Feed(feed::Message::Scrolled { at_bottom: true }));
        assert_eq!(app.feed.page(), 1);
        assert!(!app.feed.is_loading());
    }

    #[test]
    fn fetch_error_surfaces_the_generic_message() {
        let mut app = english_app();
        let _ = app.feed.start();
        let _ = app.update(Message::Feed(feed::Message::PageLoaded(Err(Error::Http(
            "connection timed out".into(),
        )))));

        assert!(!app.feed.is_loading());
        assert!(app.feed.entries().is_empty());
        let error = app.feed.error().expect("error should be set");
        assert_eq!(error.friendly_text(), "Error fetching data.");
    }

    #[test]
    fn previous_from_page_two_rebuilds_page_one() {
        let mut app = english_app();
        let _ = app.feed.start();
        let _ = app.update(Message::Feed(feed::Message::PageLoaded(Ok(sample_page(5)))));
        let _ = app.update(Message::Feed(feed::Message::NextPressed));
        let _ = app.update(Message::Feed(feed::Message::PageLoaded(Ok(sample_page(5)))));

        let _ = app.update(Message::Feed(feed::Message::PreviousPressed));

        assert_eq!(app.feed.page(), 1);
        assert!(app.feed.entries().is_empty());
        assert!(app.feed.is_loading());
    }

    #[test]
    fn tick_spins_the_spinner_while_loading() {
        let mut app = english_app();
        let _ = app.feed.start();

        let before = app.feed.spinner_rotation();
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.feed.spinner_rotation() > before);
    }

    #[test]
    fn title_comes_from_translations() {
        let app = english_app();
        assert_eq!(app.title(), "CatLens");
    }
}
