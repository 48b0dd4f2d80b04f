// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a minimal image gallery built with the Iced GUI framework.
//!
//! It shows a folder of images as a thumbnail grid with a hamburger
//! navigation menu, a persisted light/dark theme preference (dark by
//! default), and a lightbox overlay enlarging any clicked image.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
