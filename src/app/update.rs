// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::config::Config;
use super::{persistence, Message};
use crate::application::port::LinkOpener;
use crate::catalog::Catalog;
use crate::error::Error;
use crate::gallery::{self, Effect, Tab};
use crate::i18n::fluent::I18n;
use crate::media::loader::Loader;
use crate::media::{ImageCache, ImageSource};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub catalog: &'a Catalog,
    pub gallery: &'a mut gallery::State,
    pub images: &'a mut ImageCache,
    pub loader: Option<&'a Loader>,
    pub opener: &'a Arc<dyn LinkOpener>,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => handle_gallery_message(ctx, msg),
        Message::Navbar(msg) => handle_navbar_message(ctx, msg),
        Message::Notification(msg) => {
            ctx.notifications.handle_message(&msg);
            Task::none()
        }
        Message::ImageLoaded { uri, result } => {
            handle_image_loaded(ctx.images, uri, result);
            Task::none()
        }
        Message::LinkOpened { url, result } => {
            if let Err(err) = result {
                log::warn!("Could not open {}: {}", url, err);
                ctx.notifications.push(
                    Notification::error("notification-link-open-failed").with_arg("url", url),
                );
            }
            Task::none()
        }
        Message::Tick(now) => {
            ctx.notifications.expire(now);
            Task::none()
        }
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, msg: gallery::Message) -> Task<Message> {
    match ctx.gallery.handle(msg, ctx.catalog) {
        Effect::None => Task::none(),
        Effect::FilterChanged(filter) => {
            persistence::persist_filter(ctx.config, filter);
            request_images(ctx.catalog, ctx.gallery, ctx.images, ctx.loader)
        }
        Effect::ImagesChanged => {
            request_images(ctx.catalog, ctx.gallery, ctx.images, ctx.loader)
        }
        Effect::OpenLink(url) => open_link(Arc::clone(ctx.opener), url),
    }
}

fn handle_navbar_message(ctx: &mut UpdateContext<'_>, msg: navbar::Message) -> Task<Message> {
    match navbar::update(msg, ctx.theme_mode) {
        navbar::Event::SelectTab(tab) => {
            handle_gallery_message(ctx, gallery::Message::SelectTab(tab))
        }
        navbar::Event::ThemeModeChanged(mode) => {
            persistence::persist_theme_mode(ctx.config, mode);
            Task::none()
        }
        navbar::Event::CycleLanguage => {
            let locale = ctx.i18n.next_locale();
            log::info!("Switching language to {}", locale);
            ctx.i18n.set_locale(locale.clone());
            persistence::persist_language(ctx.config, &locale);
            Task::none()
        }
    }
}

fn handle_image_loaded(images: &mut ImageCache, uri: String, result: Result<Handle, Error>) {
    match result {
        Ok(handle) => images.complete(uri, Some(handle)),
        Err(err) => {
            log::warn!("Failed to load image {}: {}", uri, err);
            images.complete(uri, None);
        }
    }
}

/// Hands `url` to the desktop on a blocking thread.
fn open_link(opener: Arc<dyn LinkOpener>, url: String) -> Task<Message> {
    log::info!("Opening {}", url);
    Task::perform(
        async move {
            let target = url.clone();
            let result = tokio::task::spawn_blocking(move || opener.open(&target))
                .await
                .unwrap_or_else(|err| Err(Error::Launch(err.to_string())));
            (url, result)
        },
        |(url, result)| Message::LinkOpened { url, result },
    )
}

/// Image URIs the current screen draws: the active grid's covers plus the
/// whole gallery of the open event.
pub fn wanted_images<'a>(catalog: &'a Catalog, state: &gallery::State) -> Vec<&'a str> {
    let mut uris: Vec<&str> = match state.active_tab() {
        Tab::Events => state
            .visible_events(catalog)
            .into_iter()
            .map(|event| event.image.as_str())
            .collect(),
        Tab::Videos => catalog.videos.iter().map(|v| v.thumbnail.as_str()).collect(),
        Tab::Magazine => catalog.magazines.iter().map(|m| m.image.as_str()).collect(),
    };

    if let Some(open) = state.selected_event().and_then(|event| catalog.event(event.id)) {
        uris.extend(open.gallery.iter());
    }
    uris
}

/// Starts a fetch for every wanted image not already in the cache.
///
/// The cache grows to hold the whole wanted set first, so a large grid never
/// evicts its own images.
pub fn request_images(
    catalog: &Catalog,
    state: &gallery::State,
    images: &mut ImageCache,
    loader: Option<&Loader>,
) -> Task<Message> {
    let wanted = wanted_images(catalog, state);
    images.reserve(wanted.len());

    let mut tasks = Vec::new();
    for uri in wanted {
        if !images.request(uri) {
            continue;
        }
        let Some(loader) = loader else {
            images.complete(uri.to_string(), None);
            continue;
        };

        let loader = loader.clone();
        let source = ImageSource::resolve(uri, catalog.base_dir.as_deref());
        let uri = uri.to_string();
        log::debug!("Fetching {}", uri);
        tasks.push(Task::perform(
            async move {
                let result = loader.load(source).await;
                (uri, result)
            },
            |(uri, result)| Message::ImageLoaded { uri, result },
        ));
    }

    Task::batch(tasks)
}
