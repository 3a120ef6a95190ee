// SPDX-License-Identifier: MPL-2.0
//! Gallery screen views.
//!
//! Everything here is a pure function of [`crate::gallery::State`], the
//! catalog and the image cache. Interactions are emitted as
//! [`crate::gallery::Message`] and handled by the state itself.

mod cards;
mod event_modal;
mod filter_bar;
mod grid;
mod media;

pub use grid::columns_for_width;

use crate::catalog::Catalog;
use crate::gallery::{Message, State, Tab};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{column, container, text, Column};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the gallery.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub state: &'a State,
    pub images: &'a ImageCache,
}

/// Renders the active tab: filter bar (events only) and card grid.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let snapshot = ctx.state.snapshot(ctx.catalog);

    let body = if snapshot.items.is_empty() {
        empty_state(ctx.i18n, snapshot.tab)
    } else {
        grid::view(move || build_cards(ctx))
    };

    let mut content = Column::new().spacing(spacing::LG).width(Length::Fill);
    if snapshot.tab == Tab::Events {
        content = content.push(filter_bar::view(ctx.i18n, snapshot.filter));
    }
    content.push(body).into()
}

fn build_cards(ctx: ViewContext<'_>) -> Vec<Element<'_, Message>> {
    let hovered = ctx.state.hovered();
    match ctx.state.active_tab() {
        Tab::Events => ctx
            .state
            .visible_events(ctx.catalog)
            .into_iter()
            .map(|event| cards::event_card(ctx, event, hovered))
            .collect(),
        Tab::Videos => ctx
            .catalog
            .videos
            .iter()
            .map(|video| cards::video_card(ctx, video, hovered))
            .collect(),
        Tab::Magazine => ctx
            .catalog
            .magazines
            .iter()
            .map(|magazine| cards::magazine_card(ctx, magazine, hovered))
            .collect(),
    }
}

/// The event detail modal, to be stacked over the page while an event is
/// selected.
pub fn modal(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    event_modal::view(ctx)
}

fn empty_state(i18n: &I18n, tab: Tab) -> Element<'_, Message> {
    let message = text(i18n.tr(tab.empty_key()))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        });

    container(column![message].align_x(alignment::Horizontal::Center))
        .width(Length::Fill)
        .padding(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .into()
}
