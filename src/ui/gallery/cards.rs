// SPDX-License-Identifier: MPL-2.0
//! Event, video and magazine cards.
//!
//! A card is a borderless button (the whole surface is clickable) inside a
//! styled container, wrapped in a `mouse_area` reporting hover changes.

use super::{media, ViewContext};
use crate::catalog::{Event, EventStatus, Magazine, Video};
use crate::gallery::{Card, Message};
use crate::i18n::date;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, container, mouse_area, stack, text, Space};
use iced::{alignment, Color, Element, Length, Theme};

pub fn event_card<'a>(
    ctx: ViewContext<'a>,
    event: &'a Event,
    hovered: Option<Card>,
) -> Element<'a, Message> {
    let card = Card::Event(event.id);
    let is_hovered = hovered == Some(card);

    let cover = stack![
        media::view(
            ctx.images,
            &event.image,
            sizing::CARD_MEDIA_HEIGHT,
            event.title.clone()
        ),
        container(status_badge(ctx, &event.status))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::SM),
    ];

    let mut body = column![
        text(event.title.as_str()).size(typography::TITLE_MD),
        muted(
            date::format_event_date(event, ctx.i18n.current_locale()),
            typography::CAPTION
        ),
    ]
    .spacing(spacing::XS);

    if is_hovered {
        body = body
            .push(muted(event.excerpt(), typography::BODY))
            .push(accent(ctx.i18n.tr("event-card-cta")));
    }

    let body = container(body).padding(spacing::MD).width(Length::Fill);
    let body = if is_hovered {
        body
    } else {
        body.max_height(sizing::CARD_BODY_COLLAPSED)
    };

    framed(
        card,
        is_hovered,
        column![cover, body].into(),
        Message::OpenEvent(event.id),
    )
}

pub fn video_card<'a>(
    ctx: ViewContext<'a>,
    video: &'a Video,
    hovered: Option<Card>,
) -> Element<'a, Message> {
    let card = Card::Video(video.id);
    let is_hovered = hovered == Some(card);

    let play = container(
        container(text("▶").size(typography::TITLE_LG))
            .padding([spacing::SM, spacing::MD])
            .style(styles::overlay::indicator(sizing::ICON_XL)),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::CARD_MEDIA_HEIGHT));

    let cover = stack![
        media::view(
            ctx.images,
            &video.thumbnail,
            sizing::CARD_MEDIA_HEIGHT,
            video.title.clone()
        ),
        play,
    ];

    let body = column![
        text(video.title.as_str()).size(typography::TITLE_MD),
        accent(ctx.i18n.tr("video-card-cta")),
    ]
    .spacing(spacing::XS);

    framed(
        card,
        is_hovered,
        column![cover, container(body).padding(spacing::MD)].into(),
        Message::OpenVideo(video.id),
    )
}

pub fn magazine_card<'a>(
    ctx: ViewContext<'a>,
    magazine: &'a Magazine,
    hovered: Option<Card>,
) -> Element<'a, Message> {
    let card = Card::Magazine(magazine.id);
    let is_hovered = hovered == Some(card);

    let caption = container(
        text(ctx.i18n.tr("magazine-card-caption")).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::overlay::caption_strip);

    let cover = stack![
        media::view(
            ctx.images,
            &magazine.image,
            sizing::COVER_HEIGHT,
            magazine.title.clone()
        ),
        column![Space::new().height(Length::Fill), caption]
            .height(Length::Fixed(sizing::COVER_HEIGHT)),
    ];

    let body = column![
        text(magazine.title.as_str()).size(typography::TITLE_MD),
        accent(ctx.i18n.tr("magazine-card-cta")),
    ]
    .spacing(spacing::XS);

    framed(
        card,
        is_hovered,
        column![cover, container(body).padding(spacing::MD)].into(),
        Message::OpenMagazine(magazine.id),
    )
}

/// Badge tone: green for past events, amber for everything still to come.
fn status_tone(status: &EventStatus) -> fn(&ColorScheme) -> Color {
    match status {
        EventStatus::Completed => |colors: &ColorScheme| colors.success,
        EventStatus::Upcoming | EventStatus::Other(_) => |colors: &ColorScheme| colors.warning,
    }
}

/// Small pill reading "Completed" or "Upcoming".
pub fn status_badge<'a>(ctx: ViewContext<'a>, status: &EventStatus) -> Element<'a, Message> {
    let tone = status_tone(status);
    container(text(ctx.i18n.tr(status.badge_key())).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme| {
            styles::container::badge(tone(&ColorScheme::for_theme(theme)))(theme)
        })
        .into()
}

fn framed<'a>(
    card: Card,
    highlighted: bool,
    content: Element<'a, Message>,
    on_press: Message,
) -> Element<'a, Message> {
    let surface = button(content)
        .padding(0.0)
        .width(Length::Fill)
        .style(styles::button::card)
        .on_press(on_press);

    let frame = container(surface)
        .width(Length::Fill)
        .clip(true)
        .style(styles::container::card(highlighted));

    mouse_area(frame)
        .on_enter(Message::HoverCard(card))
        .on_exit(Message::UnhoverCard(card))
        .into()
}

fn muted<'a>(content: String, size: f32) -> Element<'a, Message> {
    text(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        })
        .into()
}

fn accent<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).brand_primary),
        })
        .into()
}
