// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay showing an enlarged copy of a clicked gallery image.
//!
//! The overlay state lives once in the application; reopening with another
//! image reuses it and swaps the displayed image. A click anywhere on the
//! overlay, the close button, or Escape dismisses it. The displayed image is
//! transient state and is never persisted.

use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, text, Column, Container, Stack},
    ContentFit, Element, Length, Task, Theme,
};
use std::path::PathBuf;

/// The image currently enlarged in the overlay.
#[derive(Debug, Clone)]
pub struct Preview {
    pub path: PathBuf,
    pub handle: iced::widget::image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Lightbox overlay state. One instance exists for the whole application.
#[derive(Debug, Clone, Default)]
pub struct State {
    preview: Option<Preview>,
    /// Path of an in-flight load; a stale completion for another path is
    /// dropped so the latest click always wins.
    pending: Option<PathBuf>,
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Asynchronous image load finished for the given path.
    Loaded(PathBuf, Result<ImageData, Error>),
    /// Dismiss the overlay.
    Close,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The requested image could not be loaded; the overlay stays closed.
    LoadFailed(Error),
}

impl State {
    /// Starts loading `path` for display and returns the load task.
    ///
    /// Decoding happens off the update loop via [`Task::perform`].
    pub fn open(&mut self, path: PathBuf) -> Task<Message> {
        self.pending = Some(path.clone());
        Task::perform(
            async move {
                let result = media::load_image(&path);
                (path, result)
            },
            |(path, result)| Message::Loaded(path, result),
        )
    }

    /// Handle a lightbox message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Loaded(path, result) => {
                if self.pending.as_deref() != Some(path.as_path()) {
                    // Stale completion from an earlier click.
                    return Effect::None;
                }
                self.pending = None;

                match result {
                    Ok(data) => {
                        self.preview = Some(Preview {
                            path,
                            handle: data.handle,
                            width: data.width,
                            height: data.height,
                        });
                        Effect::None
                    }
                    Err(err) => Effect::LoadFailed(err),
                }
            }
            Message::Close => {
                self.preview = None;
                self.pending = None;
                Effect::None
            }
        }
    }

    /// Returns `true` while the overlay is displayed.
    pub fn is_open(&self) -> bool {
        self.preview.is_some()
    }

    /// Render the overlay, or `None` while it is dismissed.
    pub fn view(&self) -> Option<Element<'_, Message>> {
        let preview = self.preview.as_ref()?;

        let file_name = preview
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let caption = text(format!(
            "{} ({}x{})",
            file_name, preview.width, preview.height
        ))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::overlay_text_color()),
        });

        let image = Image::new(preview.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain);

        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(image)
            .push(caption);

        // The whole backdrop is clickable, image included.
        let backdrop = mouse_area(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Close);

        let close_button = button(icons::overlay_sized(icons::close(), sizing::ICON_MD))
            .on_press(Message::Close)
            .padding(spacing::XS)
            .style(styles::button::overlay(
                theme::overlay_text_color(),
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ));

        let stack = Stack::new().push(backdrop).push(
            Container::new(close_button)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::MD),
        );

        Some(stack.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn stub_data(width: u32, height: u32) -> ImageData {
        ImageData {
            handle: Handle::from_bytes(Vec::new()),
            width,
            height,
        }
    }

    #[test]
    fn starts_closed() {
        let state = State::default();
        assert!(!state.is_open());
        assert!(state.view().is_none());
    }

    #[test]
    fn open_is_pending_until_load_completes() {
        let mut state = State::default();
        let _task = state.open(PathBuf::from("a.png"));
        assert!(!state.is_open());

        let effect = state.handle(Message::Loaded(PathBuf::from("a.png"), Ok(stub_data(4, 2))));
        assert!(matches!(effect, Effect::None));
        assert!(state.is_open());
        assert!(state.view().is_some());
    }

    #[test]
    fn reopening_replaces_the_displayed_image() {
        let mut state = State::default();
        let _task = state.open(PathBuf::from("a.png"));
        state.handle(Message::Loaded(PathBuf::from("a.png"), Ok(stub_data(4, 2))));

        let _task = state.open(PathBuf::from("b.png"));
        state.handle(Message::Loaded(PathBuf::from("b.png"), Ok(stub_data(8, 8))));

        assert!(state.is_open());
        let preview = state.preview.as_ref().expect("preview should be set");
        assert_eq!(preview.path, PathBuf::from("b.png"));
        assert_eq!(preview.width, 8);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = State::default();
        let _task = state.open(PathBuf::from("a.png"));
        let _task = state.open(PathBuf::from("b.png"));

        let effect = state.handle(Message::Loaded(PathBuf::from("a.png"), Ok(stub_data(4, 2))));
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_open());

        state.handle(Message::Loaded(PathBuf::from("b.png"), Ok(stub_data(2, 2))));
        assert!(state.is_open());
    }

    #[test]
    fn failed_load_keeps_overlay_closed() {
        let mut state = State::default();
        let _task = state.open(PathBuf::from("broken.png"));

        let effect = state.handle(Message::Loaded(
            PathBuf::from("broken.png"),
            Err(Error::Image("decode failure".into())),
        ));
        assert!(matches!(effect, Effect::LoadFailed(_)));
        assert!(!state.is_open());
    }

    #[test]
    fn close_clears_preview_and_pending() {
        let mut state = State::default();
        let _task = state.open(PathBuf::from("a.png"));
        state.handle(Message::Loaded(PathBuf::from("a.png"), Ok(stub_data(4, 2))));
        assert!(state.is_open());

        let effect = state.handle(Message::Close);
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_open());

        // A completion arriving after close must not reopen the overlay.
        state.handle(Message::Loaded(PathBuf::from("a.png"), Ok(stub_data(4, 2))));
        assert!(!state.is_open());
    }

    #[test]
    fn close_when_already_closed_is_a_no_op() {
        let mut state = State::default();
        let effect = state.handle(Message::Close);
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_open());
    }
}
