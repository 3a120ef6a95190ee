// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the scrollable page (header and active grid), the
//! event modal when an event is selected, and the toast stack.

use super::Message;
use crate::catalog::Catalog;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery as gallery_view;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{column, container, scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageCache,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active_tab: ctx.gallery.active_tab(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let gallery_ctx = gallery_view::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        state: ctx.gallery,
        images: ctx.images,
    };

    let grid = container(gallery_view::view(gallery_ctx).map(Message::Gallery))
        .padding(spacing::XL)
        .center_x(Length::Fill);

    let page = container(scrollable(column![header, grid]).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(modal) = gallery_view::modal(gallery_ctx) {
        layers = layers.push(modal.map(Message::Gallery));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
