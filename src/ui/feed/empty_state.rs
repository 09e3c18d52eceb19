// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the feed has no entries.
//!
//! Shown only while no fetch is in flight, so it doubles as the landing
//! spot after an empty first page or after backing out of a cleared feed.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state view.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("feed-empty-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("feed-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let reload_button = button(Text::new(i18n.tr("feed-empty-reload")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ReloadPressed);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(reload_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
