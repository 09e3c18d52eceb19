// SPDX-License-Identifier: MPL-2.0
//! Feed rendering: heading, error line, entry list, navigation controls,
//! and the loading spinner.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feed::component::{Entry, Message, State, Thumbnail};
use crate::ui::feed::empty_state;
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// How close (in relative offset) the viewport must be to the end of the
/// content to count as "at the bottom".
const SCROLL_BOTTOM_THRESHOLD: f32 = 0.99;

/// Environment information required to render the feed.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Renders the whole feed screen.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("feed-title")).size(typography::TITLE_LG));

    if let Some(error) = state.error() {
        content = content.push(
            Text::new(error.friendly_text())
                .size(typography::BODY)
                .color(palette::ERROR_500),
        );
    }

    let list: Element<'a, Message> = if state.shows_empty_state() {
        empty_state::view(i18n)
    } else {
        entry_list(state.entries(), i18n)
    };
    content = content.push(list);

    content = content.push(navigation_row(state, i18n));

    if state.is_loading() {
        content = content.push(
            Container::new(
                Spinner::new(palette::PRIMARY_500, state.spinner_rotation()).into_element(),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// The scrollable single-column list of entries.
fn entry_list<'a>(entries: &'a [Entry], i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FEED_MAX_WIDTH));

    for entry in entries {
        column = column.push(entry_card(entry, i18n));
    }

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport: Viewport| Message::Scrolled {
        at_bottom: near_bottom(&viewport),
    })
    .into()
}

fn entry_card<'a>(entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = match &entry.thumbnail {
        Thumbnail::Ready(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::FEED_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Thumbnail::Pending => placeholder(i18n.tr("feed-thumbnail-loading")),
        Thumbnail::Failed => placeholder(i18n.tr("feed-thumbnail-failed")),
    };

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn placeholder<'a>(caption: String) -> Element<'a, Message> {
    Container::new(
        Text::new(caption)
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::FEED_IMAGE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::thumbnail_placeholder)
    .into()
}

/// Previous/Next controls with a gap pushing them to opposite edges.
fn navigation_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let previous = button(Text::new(i18n.tr("feed-previous-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(state.can_go_previous().then_some(Message::PreviousPressed));

    let next = button(Text::new(i18n.tr("feed-next-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::strong)
        .on_press_maybe(state.can_go_next().then_some(Message::NextPressed));

    Row::new()
        .width(Length::Fixed(sizing::FEED_MAX_WIDTH))
        .push(previous)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(next)
        .into()
}

fn near_bottom(viewport: &Viewport) -> bool {
    viewport.relative_offset().y >= SCROLL_BOTTOM_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_view_renders_in_every_state() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().expect("valid locale"));
        let mut state = State::new();

        // Empty-and-idle renders the empty state.
        let _element = view(&state, ViewEnv { i18n: &i18n });
        drop(_element);

        // Loading renders the spinner.
        let _ = state.start();
        let _element = view(&state, ViewEnv { i18n: &i18n });
    }
}
