// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for screen content blocks.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Raised card for dishes, stats, and contact blocks.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::CREAM_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Card variant carrying the brand border, for the highlighted item.
pub fn card_highlight(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
