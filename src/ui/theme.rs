// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme mode and shared color helpers.
//!
//! The mode is persisted as a single `light_mode` boolean in the config file;
//! dark is the default whenever the flag is absent.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// The two supported theme modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Builds a mode from the persisted `light_mode` flag.
    pub fn from_light_flag(light_mode: bool) -> Self {
        if light_mode {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Returns the flag to persist for this mode.
    pub fn is_light(self) -> bool {
        matches!(self, ThemeMode::Light)
    }

    /// Returns the opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Maps the mode onto the built-in Iced theme.
    pub fn to_iced(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// Backdrop color of the lightbox overlay, dimming the page underneath.
pub fn lightbox_backdrop_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::BLACK
    }
}

/// Text color used on top of the lightbox backdrop.
pub fn overlay_text_color() -> Color {
    palette::WHITE
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(!ThemeMode::default().is_light());
    }

    #[test]
    fn from_light_flag_maps_both_values() {
        assert_eq!(ThemeMode::from_light_flag(true), ThemeMode::Light);
        assert_eq!(ThemeMode::from_light_flag(false), ThemeMode::Dark);
    }

    #[test]
    fn toggled_flips_the_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn to_iced_maps_onto_builtin_themes() {
        assert!(matches!(ThemeMode::Light.to_iced(), Theme::Light));
        assert!(matches!(ThemeMode::Dark.to_iced(), Theme::Dark));
    }

    #[test]
    fn backdrop_is_translucent_black() {
        let color = lightbox_backdrop_color();
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
