// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so each icon is parsed once per process. The
//! sources are monochrome stroke icons; [`sized`] recolors them with the
//! active theme's text color so they stay visible in both modes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `sun` not `switch_to_light_theme`).

use iced::widget::svg::{self, Handle, Svg};
use iced::Theme;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(menu, "menu.svg", "Hamburger menu icon: three horizontal bars.");
define_icon!(close, "close.svg", "Close icon: diagonal cross.");
define_icon!(sun, "sun.svg", "Sun icon: switch to the light theme.");
define_icon!(moon, "moon.svg", "Moon icon: switch to the dark theme.");
define_icon!(folder, "folder.svg", "Folder icon: open a directory.");
define_icon!(images, "images.svg", "Picture frame icon: the gallery screen.");
define_icon!(info, "info.svg", "Circled i icon: the about screen.");

/// Constrains an icon to a square of the given size and tints it with the
/// active theme's text color.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size).style(themed)
}

/// Variant of [`sized`] for icons sitting on the lightbox backdrop, tinted
/// with the overlay text color regardless of the active theme.
pub fn overlay_sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size).style(overlay_themed)
}

fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

fn overlay_themed(_theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(crate::ui::theme::overlay_text_color()),
    }
}
