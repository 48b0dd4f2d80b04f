// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::opacity;
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Style for the top navigation toolbar.
///
/// Uses the current Iced `Theme` extended palette so the toolbar follows
/// the global theme mode (light/dark) while staying visually subtle.
pub fn toolbar(theme: &Theme) -> container::Style {
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
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the lightbox backdrop dimming the whole window.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::lightbox_backdrop_color())),
        text_color: Some(theme::overlay_text_color()),
        ..Default::default()
    }
}
