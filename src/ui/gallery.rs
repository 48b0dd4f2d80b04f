// SPDX-License-Identifier: MPL-2.0
//! Gallery screen rendering the thumbnail grid.
//!
//! Clicking a thumbnail asks the application to open that image in the
//! lightbox. Folders without images and the initial no-folder state render a
//! centered hint instead of the grid.

use crate::config::defaults::{GRID_COLUMNS, THUMBNAIL_CELL, THUMBNAIL_LABEL_CHARS};
use crate::gallery::ImageList;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text, Column, Container, Row, Space},
    ContentFit, Element, Length, Theme,
};
use std::path::PathBuf;

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub images: &'a ImageList,
    /// Non-fatal error from the last folder scan or image load.
    pub load_error: Option<&'a str>,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked.
    ImagePressed(PathBuf),
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::MD);

    if let Some(error) = ctx.load_error {
        content = content.push(
            text(error.to_string())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::error_text_color()),
                }),
        );
    }

    let body: Element<'a, Message> = match ctx.images.folder() {
        None => empty_state("Open a folder to browse its images."),
        Some(_) if ctx.images.is_empty() => empty_state("No images in this folder."),
        Some(folder) => {
            content = content.push(
                text(format!(
                    "{} ({} images)",
                    folder.display(),
                    ctx.images.len()
                ))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::muted_text_color()),
                }),
            );
            build_grid(ctx.images)
        }
    };

    content.push(body).into()
}

/// Build the scrollable thumbnail grid.
fn build_grid(images: &ImageList) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::SM).width(Length::Fill);

    for chunk in images.files().chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);

        for path in chunk {
            row = row.push(build_cell(path));
        }
        // Keep cells in a partial last row the same width as full rows.
        for _ in chunk.len()..GRID_COLUMNS {
            row = row.push(Space::new().width(Length::Fill));
        }

        grid = grid.push(row);
    }

    scrollable(grid).width(Length::Fill).height(Length::Fill).into()
}

/// Build a single clickable thumbnail cell.
fn build_cell(path: &PathBuf) -> Element<'_, Message> {
    let thumbnail = Image::new(Handle::from_path(path.as_path()))
        .width(Length::Fill)
        .height(Length::Fixed(THUMBNAIL_CELL))
        .content_fit(ContentFit::Cover);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let label = text(truncate_label(&file_name, THUMBNAIL_LABEL_CHARS))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        });

    let cell = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(thumbnail)
        .push(label);

    button(cell)
        .on_press(Message::ImagePressed(path.clone()))
        .padding(spacing::XXS)
        .width(Length::Fill)
        .style(styles::button::thumbnail)
        .into()
}

/// Centered hint shown instead of the grid.
fn empty_state(hint: &str) -> Element<'_, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(icons::sized(icons::images(), sizing::ICON_LG))
        .push(
            text(hint.to_string())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::muted_text_color()),
                }),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Shortens a file name so long names do not stretch their cell.
fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
