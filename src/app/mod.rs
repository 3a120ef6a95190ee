// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the gallery state to the catalog, localization,
//! persisted preferences and the image cache, and turns gallery effects
//! into asynchronous tasks (image fetches, external links).

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::LinkOpener;
use crate::catalog::{self, Catalog};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SystemLauncher;
use crate::media::loader::Loader;
use crate::media::ImageCache;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    catalog: Catalog,
    gallery: gallery::State,
    images: ImageCache,
    /// `None` when the HTTP client could not be built; every image then
    /// renders as failed.
    loader: Option<Loader>,
    opener: Arc<dyn LinkOpener>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_tab", &self.gallery.active_tab())
            .field("overlay_open", &self.gallery.overlay().is_open())
            .field("cached_images", &self.images.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 850.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and catalog, then starts fetching the first images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags
            .catalog_path
            .clone()
            .or_else(|| config.gallery.catalog_path.clone());
        let (catalog, catalog_warning) = catalog::load(catalog_path.as_deref());

        let loader = match Loader::new() {
            Ok(loader) => Some(loader),
            Err(err) => {
                log::error!("Image loading disabled: {}", err);
                None
            }
        };

        let mut app = Self::from_parts(i18n, config, catalog, loader, Arc::new(SystemLauncher));

        for key in [config_warning, catalog_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = app.request_images();
        (app, task)
    }

    fn from_parts(
        i18n: I18n,
        config: Config,
        catalog: Catalog,
        loader: Option<Loader>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        let gallery = gallery::State::new(
            config.gallery.default_tab,
            config.gallery.startup_filter(),
        );
        let capacity = NonZeroUsize::new(config::DEFAULT_IMAGE_CACHE_CAPACITY)
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            catalog,
            gallery,
            images: ImageCache::new(capacity),
            loader,
            opener,
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.selected_event() {
            Some(event) => format!("{} - {}", event.title, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            catalog: &self.catalog,
            gallery: &mut self.gallery,
            images: &mut self.images,
            loader: self.loader.as_ref(),
            opener: &self.opener,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            gallery: &self.gallery,
            images: &self.images,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }

    fn request_images(&mut self) -> Task<Message> {
        update::request_images(
            &self.catalog,
            &self.gallery,
            &mut self.images,
            self.loader.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventFilter;
    use crate::error::{Error, Result};
    use crate::gallery::Tab;
    use crate::media::ImageState;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            if let Ok(mut opened) = self.opened.lock() {
                opened.push(url.to_string());
            }
            Ok(())
        }
    }

    fn app() -> App {
        App::from_parts(
            I18n::default(),
            Config::default(),
            Catalog::sample(),
            None,
            Arc::new(RecordingOpener::default()),
        )
    }

    #[test]
    fn starts_on_configured_tab_and_filter() {
        let mut config = Config::default();
        config.gallery.default_tab = Tab::Magazine;
        config.gallery.last_filter = Some("past".into());

        let app = App::from_parts(
            I18n::default(),
            config,
            Catalog::sample(),
            None,
            Arc::new(RecordingOpener::default()),
        );

        assert_eq!(app.gallery.active_tab(), Tab::Magazine);
        assert_eq!(app.gallery.event_filter(), EventFilter::Past);
    }

    #[test]
    fn filter_change_is_remembered() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::SelectFilter(
            EventFilter::Upcoming,
        )));
        assert_eq!(app.config.gallery.last_filter.as_deref(), Some("upcoming"));
    }

    #[test]
    fn theme_cycle_updates_config() {
        let mut app = app();
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::CycleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn language_toggle_switches_and_persists() {
        let mut app = App::from_parts(
            I18n::new(Some("en-US".to_string()), &Config::default()),
            Config::default(),
            Catalog::sample(),
            None,
            Arc::new(RecordingOpener::default()),
        );
        assert_eq!(app.i18n.tr("tab-events"), "Events");

        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::CycleLanguage));

        assert_eq!(app.i18n.tr("tab-events"), "Événements");
        assert_eq!(app.config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn hover_does_not_request_images() {
        let mut app = app();
        let cover = app.catalog.videos[0].thumbnail.clone();
        let _ = app.update(Message::Gallery(gallery::Message::HoverCard(
            gallery::Card::Event(1),
        )));
        let _ = app.update(Message::Gallery(gallery::Message::UnhoverCard(
            gallery::Card::Event(1),
        )));
        assert!(app.images.is_empty());

        let _ = app.update(Message::Gallery(gallery::Message::SelectTab(Tab::Videos)));
        assert!(app.images.get(&cover).is_some());
    }

    #[test]
    fn navbar_tab_reaches_gallery() {
        let mut app = app();
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::SelectTab(
            Tab::Videos,
        )));
        assert_eq!(app.gallery.active_tab(), Tab::Videos);
    }

    #[test]
    fn failed_link_shows_error_toast() {
        let mut app = app();
        let _ = app.update(Message::LinkOpened {
            url: "https://example.com".into(),
            result: Err(Error::Launch("no handler".into())),
        });
        assert!(app.notifications.has_notifications());
        let key = app.notifications.visible().next().map(|n| n.message_key().to_string());
        assert_eq!(key.as_deref(), Some("notification-link-open-failed"));
    }

    #[test]
    fn successful_link_is_silent() {
        let mut app = app();
        let _ = app.update(Message::LinkOpened {
            url: "https://example.com".into(),
            result: Ok(()),
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn images_fail_without_loader() {
        let mut app = app();
        let _ = app.request_images();
        let cover = &app.catalog.events[0].image;
        assert!(matches!(app.images.get(cover), Some(ImageState::Failed)));
    }

    #[test]
    fn failed_image_is_recorded() {
        let mut app = app();
        let uri = app.catalog.events[0].image.clone();
        let _ = app.update(Message::ImageLoaded {
            uri: uri.clone(),
            result: Err(Error::Image("not an image".into())),
        });
        assert!(matches!(app.images.get(&uri), Some(ImageState::Failed)));
    }

    #[test]
    fn title_names_open_event() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenEvent(1)));
        let title = app.title();
        assert!(title.starts_with(&app.catalog.events[0].title));
    }

    #[test]
    fn view_builds_with_modal_and_toasts() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenEvent(2)));
        let _ = app.update(Message::LinkOpened {
            url: "https://example.com".into(),
            result: Err(Error::Launch("no handler".into())),
        });
        let _element = app.view();
    }
}
