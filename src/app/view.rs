// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::feed::{self, view::ViewEnv};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a feed::State,
}

/// Renders the application view. The feed is the only screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let feed_view = feed::view::view(ctx.feed, ViewEnv { i18n: ctx.i18n }).map(Message::Feed);

    Container::new(feed_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
