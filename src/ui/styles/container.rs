// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface wrapping each feed entry.
///
/// The color is derived from the active Iced `Theme` background so cards
/// stay readable in both light and dark modes without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let lift = if matches!(theme, Theme::Light) {
        -0.04
    } else {
        0.05
    };

    container::Style {
        background: Some(Background::Color(Color {
            r: (base.r + lift).clamp(0.0, 1.0),
            g: (base.g + lift).clamp(0.0, 1.0),
            b: (base.b + lift).clamp(0.0, 1.0),
            a: 1.0,
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Muted slab shown in place of a thumbnail that is still downloading or
/// failed to decode.
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_400)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_rounded_corners_and_shadow() {
        let style = card(&Theme::Dark);
        assert!(style.background.is_some());
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn placeholder_uses_muted_background() {
        let style = thumbnail_placeholder(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::GRAY_400))
        );
    }
}
