// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::SPINNER_TICK_MILLIS;
use crate::ui::feed;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Periodic tick driving the spinner animation and stuck-load detection.
/// Only active while a fetch is outstanding so an idle app schedules
/// nothing.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(SPINNER_TICK_MILLIS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes keyboard navigation to the feed: Right advances, Left goes back.
/// Events already captured by a focused widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Feed(feed::Message::NextPressed)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Feed(feed::Message::PreviousPressed)),
            _ => None,
        }
    })
}
