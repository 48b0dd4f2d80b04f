// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Container},
    Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DESCRIPTION: &str =
    "A minimal image gallery with a persisted theme preference and lightbox preview, \
     built with the Iced GUI toolkit.";

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToGallery,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the about screen.
pub fn view() -> Element<'static, Message> {
    let title = text("Iced Gallery").size(typography::TITLE_LG);
    let version = text(format!("Version {}", APP_VERSION))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        });
    let description = text(DESCRIPTION).size(typography::BODY);
    let license = text("Licensed under MPL-2.0.")
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        });

    let back_button = button(text("Back to gallery").size(typography::BODY))
        .on_press(Message::BackToGallery);

    let column = Column::new()
        .spacing(spacing::MD)
        .max_width(480.0)
        .align_x(Horizontal::Center)
        .push(title)
        .push(version)
        .push(description)
        .push(license)
        .push(back_button);

    let centered = Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);

    scrollable(centered).height(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_message_propagates_event() {
        assert!(matches!(
            update(&Message::BackToGallery),
            Event::BackToGallery
        ));
    }

    #[test]
    fn about_view_renders() {
        let _element: Element<'static, Message> = view();
    }
}
