// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Thumbnail grid for the opened folder
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with hamburger menu and theme toggle
//! - [`lightbox`] - Fullscreen overlay enlarging a clicked image
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Light/dark theme mode and shared color helpers
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`icons`] - SVG icon loading and rendering

pub mod about;
pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod lightbox;
pub mod navbar;
pub mod styles;
pub mod theme;
