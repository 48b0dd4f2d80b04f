// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the hamburger menu and theme toggle that appear at the
//! top of every screen. The menu provides access to the Gallery and About
//! screens and to the folder picker. Activating any menu entry closes the
//! menu; the theme toggle leaves it untouched.

use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme::ThemeMode;
use iced::widget::svg::Svg;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Title shown in the toolbar next to the hamburger button.
const TOOLBAR_TITLE: &str = "Iced Gallery";

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenGallery,
    OpenFolder,
    OpenAbout,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenGallery,
    OpenFolder,
    OpenAbout,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
///
/// Menu entries close the menu on activation; the theme toggle is a toolbar
/// button and leaves the menu state alone.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenGallery => {
            *menu_open = false;
            Event::OpenGallery
        }
        Message::OpenFolder => {
            *menu_open = false;
            Event::OpenFolder
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown();
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the hamburger button, app title, and theme toggle.
fn build_top_bar(ctx: &ViewContext) -> Element<'static, Message> {
    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::toolbar);

    let title = Text::new(TOOLBAR_TITLE).size(typography::TITLE_MD);

    // Show the mode the press switches to: a sun while dark, a moon while light.
    let theme_icon = match ctx.theme_mode {
        ThemeMode::Dark => icons::sun(),
        ThemeMode::Light => icons::moon(),
    };
    let theme_button = button(icons::sized(theme_icon, sizing::ICON_MD))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::toolbar);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build the dropdown menu with Gallery, Open Folder, and About entries.
fn build_dropdown() -> Element<'static, Message> {
    let gallery_item = build_menu_item(icons::images(), "Gallery", Message::OpenGallery);
    let folder_item = build_menu_item(icons::folder(), "Open Folder...", Message::OpenFolder);
    let about_item = build_menu_item(icons::info(), "About", Message::OpenAbout);

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(gallery_item)
        .push(folder_item)
        .push(about_item);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item with icon and label.
fn build_menu_item(
    icon: Svg<'static>,
    label: &'static str,
    message: Message,
) -> Element<'static, Message> {
    let icon_sized = icons::sized(icon, sizing::ICON_SM);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon_sized)
        .push(Text::new(label));

    button(row)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_open_state() {
        let mut menu_open = false;
        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(menu_open);

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(!menu_open);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);

        menu_open = true;
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn menu_entries_close_the_menu_and_propagate() {
        let mut menu_open = true;
        assert!(matches!(
            update(Message::OpenAbout, &mut menu_open),
            Event::OpenAbout
        ));
        assert!(!menu_open);

        menu_open = true;
        assert!(matches!(
            update(Message::OpenGallery, &mut menu_open),
            Event::OpenGallery
        ));
        assert!(!menu_open);

        menu_open = true;
        assert!(matches!(
            update(Message::OpenFolder, &mut menu_open),
            Event::OpenFolder
        ));
        assert!(!menu_open);
    }

    #[test]
    fn theme_toggle_leaves_menu_state_alone() {
        let mut menu_open = true;
        assert!(matches!(
            update(Message::ToggleTheme, &mut menu_open),
            Event::ToggleTheme
        ));
        assert!(menu_open);
    }

    #[test]
    fn navbar_view_renders() {
        let ctx = ViewContext {
            menu_open: true,
            theme_mode: ThemeMode::Dark,
        };
        let _element: Element<'static, Message> = view(ctx);
    }
}
