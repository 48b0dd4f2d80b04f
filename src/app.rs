// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar, gallery,
//! about screen, and lightbox overlay.
//!
//! The `App` struct wires the components together and translates their events
//! into side effects like config persistence and asynchronous image loading.
//! Policy decisions (window sizing, persistence timing, Escape handling) stay
//! close to the main update loop so user-facing behavior is easy to audit.

use crate::config::{self, Config};
use crate::gallery::ImageList;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::gallery as gallery_screen;
use crate::ui::lightbox;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theme::ThemeMode;
use iced::{
    event, keyboard,
    widget::{Column, Stack},
    window, Element, Length, Subscription, Task, Theme,
};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components and the persisted
/// theme preference.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    menu_open: bool,
    images: ImageList,
    lightbox: lightbox::State,
    /// Non-fatal error from the last scan or image load, shown in the gallery.
    load_error: Option<String>,
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    About,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("image_count", &self.images.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_screen::Message),
    About(about::Message),
    Lightbox(lightbox::Message),
    /// Folder chosen in the native picker, or `None` when dismissed.
    FolderDialogResult(Option<PathBuf>),
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional folder to scan on startup.
    pub directory: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

const WINDOW_TITLE: &str = "Iced Gallery";

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Gallery,
            theme_mode: ThemeMode::default(),
            menu_open: false,
            images: ImageList::new(),
            lightbox: lightbox::State::default(),
            load_error: None,
        }
    }
}

impl App {
    /// Initializes application state from the persisted preference and
    /// optionally scans the folder named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App {
            theme_mode: ThemeMode::from_light_flag(config.light_mode),
            ..Self::default()
        };

        if let Some(directory) = flags.directory {
            let path = PathBuf::from(&directory);
            match ImageList::scan_directory(&path) {
                Ok(list) => app.images = list,
                Err(err) => {
                    log::warn!("Failed to scan directory {}: {}", path.display(), err);
                    app.load_error = Some(err.to_string());
                }
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(msg, &mut self.menu_open) {
                NavbarEvent::None => Task::none(),
                NavbarEvent::OpenGallery => {
                    self.screen = Screen::Gallery;
                    Task::none()
                }
                NavbarEvent::OpenAbout => {
                    self.screen = Screen::About;
                    Task::none()
                }
                NavbarEvent::OpenFolder => Self::open_folder_dialog(),
                NavbarEvent::ToggleTheme => {
                    self.theme_mode = self.theme_mode.toggled();
                    self.persist_preferences();
                    Task::none()
                }
            },
            Message::Gallery(gallery_screen::Message::ImagePressed(path)) => {
                self.load_error = None;
                self.lightbox.open(path).map(Message::Lightbox)
            }
            Message::About(msg) => match about::update(&msg) {
                AboutEvent::BackToGallery => {
                    self.screen = Screen::Gallery;
                    Task::none()
                }
            },
            Message::Lightbox(msg) => {
                match self.lightbox.handle(msg) {
                    lightbox::Effect::None => {}
                    lightbox::Effect::LoadFailed(err) => {
                        log::warn!("Failed to load image: {}", err);
                        self.load_error = Some(err.to_string());
                    }
                }
                Task::none()
            }
            Message::FolderDialogResult(Some(directory)) => {
                match ImageList::scan_directory(&directory) {
                    Ok(list) => {
                        self.images = list;
                        self.load_error = None;
                        self.screen = Screen::Gallery;
                    }
                    Err(err) => {
                        log::warn!("Failed to scan directory {}: {}", directory.display(), err);
                        self.load_error = Some(err.to_string());
                    }
                }
                Task::none()
            }
            Message::FolderDialogResult(None) => Task::none(),
            Message::EscapePressed => {
                if self.lightbox.is_open() {
                    self.lightbox.handle(lightbox::Message::Close);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(navbar::ViewContext {
            menu_open: self.menu_open,
            theme_mode: self.theme_mode,
        })
        .map(Message::Navbar);

        let content: Element<'_, Message> = match self.screen {
            Screen::Gallery => gallery_screen::view(gallery_screen::ViewContext {
                images: &self.images,
                load_error: self.load_error.as_deref(),
            })
            .map(Message::Gallery),
            Screen::About => about::view().map(Message::About),
        };

        let base = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar)
            .push(content);

        match self.lightbox.view() {
            Some(overlay) => Stack::new()
                .push(base)
                .push(overlay.map(Message::Lightbox))
                .into(),
            None => base.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Escape only matters while the lightbox is shown.
        if self.lightbox.is_open() {
            event::listen_with(|event, _status, _window| match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    /// Writes the current theme preference to disk.
    fn persist_preferences(&self) {
        let config = Config {
            light_mode: self.theme_mode.is_light(),
        };
        if let Err(err) = config::save(&config) {
            log::warn!("Failed to save preferences: {}", err);
        }
    }

    fn open_folder_dialog() -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .pick_folder()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::FolderDialogResult,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::ImageData;
    use iced::widget::image::Handle;

    fn loaded(path: &str, width: u32, height: u32) -> Message {
        Message::Lightbox(lightbox::Message::Loaded(
            PathBuf::from(path),
            Ok(ImageData {
                handle: Handle::from_bytes(Vec::new()),
                width,
                height,
            }),
        ))
    }

    #[test]
    fn default_app_starts_dark_on_gallery_with_closed_menu() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Gallery);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(!app.menu_open);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn theme_follows_mode() {
        let mut app = App::default();
        assert!(matches!(app.theme(), Theme::Dark));
        app.theme_mode = ThemeMode::Light;
        assert!(matches!(app.theme(), Theme::Light));
    }

    #[test]
    fn hamburger_toggles_and_menu_entry_closes() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));
        assert!(!app.menu_open);
        assert_eq!(app.screen, Screen::About);
    }

    #[test]
    fn about_back_returns_to_gallery() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));
        assert_eq!(app.screen, Screen::About);

        let _ = app.update(Message::About(about::Message::BackToGallery));
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn thumbnail_press_then_load_opens_lightbox() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery_screen::Message::ImagePressed(
            PathBuf::from("a.png"),
        )));
        assert!(!app.lightbox.is_open());

        let _ = app.update(loaded("a.png", 4, 2));
        assert!(app.lightbox.is_open());
    }

    #[test]
    fn escape_closes_open_lightbox() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery_screen::Message::ImagePressed(
            PathBuf::from("a.png"),
        )));
        let _ = app.update(loaded("a.png", 4, 2));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn escape_with_closed_lightbox_is_a_no_op() {
        let mut app = App::default();
        let _ = app.update(Message::EscapePressed);
        assert!(!app.lightbox.is_open());
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn failed_image_load_surfaces_error() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery_screen::Message::ImagePressed(
            PathBuf::from("broken.png"),
        )));
        let _ = app.update(Message::Lightbox(lightbox::Message::Loaded(
            PathBuf::from("broken.png"),
            Err(Error::Image("decode failure".into())),
        )));

        assert!(!app.lightbox.is_open());
        assert!(app.load_error.as_deref().unwrap_or("").contains("decode"));
    }

    #[test]
    fn new_image_press_clears_previous_error() {
        let mut app = App::default();
        app.load_error = Some("old error".into());

        let _ = app.update(Message::Gallery(gallery_screen::Message::ImagePressed(
            PathBuf::from("a.png"),
        )));
        assert!(app.load_error.is_none());
    }

    #[test]
    fn dismissed_folder_dialog_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::FolderDialogResult(None));
        assert!(app.images.is_empty());
        assert!(app.load_error.is_none());
    }

    #[test]
    fn folder_dialog_failure_surfaces_error() {
        let mut app = App::default();
        let _ = app.update(Message::FolderDialogResult(Some(PathBuf::from(
            "/nonexistent/gallery",
        ))));
        assert!(app.load_error.is_some());
        assert!(app.images.is_empty());
    }
}
