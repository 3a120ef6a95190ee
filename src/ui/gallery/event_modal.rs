// SPDX-License-Identifier: MPL-2.0
//! Event detail modal with its image carousel.
//!
//! The backdrop is a `mouse_area` that closes the modal. The panel sits in
//! an `opaque` layer so clicks on it never reach the backdrop.

use super::{cards, media, ViewContext};
use crate::catalog::Event;
use crate::gallery::{Carousel, Message};
use crate::i18n::date;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text, Row,
    Space,
};
use iced::{alignment, Element, Length};

/// The modal layer, or `None` while no event is selected.
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    let overlay = ctx.state.overlay();
    let event = overlay.selected()?;
    let carousel = *overlay.carousel()?;

    let panel = container(scrollable(panel(ctx, event, carousel)))
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel);

    let backdrop = mouse_area(
        center(opaque(panel))
            .padding(spacing::XL)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseOverlay);

    Some(opaque(backdrop))
}

fn panel<'a>(
    ctx: ViewContext<'a>,
    event: &'a Event,
    carousel: Carousel,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let close = button(text("✕").size(typography::TITLE_SM))
        .padding(spacing::XS)
        .style(styles::button::ghost)
        .on_press(Message::CloseOverlay);

    let header = row![
        column![
            text(event.title.as_str()).size(typography::TITLE_LG),
            row![
                text(date::format_event_date(event, i18n.current_locale()))
                    .size(typography::BODY),
                cards::status_badge(ctx, &event.status),
            ]
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center),
        ]
        .spacing(spacing::XS)
        .width(Length::Fill),
        close,
    ]
    .align_y(alignment::Vertical::Top);

    column![
        header,
        section_title(i18n, "event-modal-gallery"),
        slideshow(ctx, event, carousel),
        section_title(i18n, "event-modal-description"),
        text(event.description.as_str()).size(typography::BODY_LG),
    ]
    .spacing(spacing::MD)
    .into()
}

fn section_title<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    text(i18n.tr(key)).size(typography::TITLE_SM).into()
}

/// Current image with arrows, counter and dots.
fn slideshow<'a>(
    ctx: ViewContext<'a>,
    event: &'a Event,
    carousel: Carousel,
) -> Element<'a, Message> {
    let slide = carousel.current();
    let uri = ctx
        .state
        .overlay()
        .current_image()
        .unwrap_or(event.image.as_str());
    let number = slide.number().to_string();
    let alt = ctx.i18n.tr_with_args(
        "event-modal-image-alt",
        &[("title", event.title.as_str()), ("number", number.as_str())],
    );

    let picture = media::view(ctx.images, uri, sizing::CAROUSEL_HEIGHT, alt);

    if !carousel.has_navigation() {
        return picture;
    }

    let arrow = |label: &'static str, message: Message| {
        button(center(text(label).size(typography::TITLE_MD)))
            .padding(0.0)
            .width(Length::Fixed(sizing::CAROUSEL_ARROW))
            .height(Length::Fixed(sizing::CAROUSEL_ARROW))
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            ))
            .on_press(message)
    };

    let arrows = row![
        arrow("◀", Message::PreviousImage),
        Space::new().width(Length::Fill),
        arrow("▶", Message::NextImage),
    ]
    .padding(spacing::MD)
    .align_y(alignment::Vertical::Center)
    .height(Length::Fixed(sizing::CAROUSEL_HEIGHT));

    let counter = container(
        container(text(carousel.position_label()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(sizing::ICON_MD)),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .padding(spacing::MD);

    column![stack![picture, arrows, counter], dots(carousel)]
        .spacing(spacing::SM)
        .into()
}

fn dots<'a>(carousel: Carousel) -> Element<'a, Message> {
    let current = carousel.current();
    let dots: Vec<Element<'a, Message>> = carousel
        .slides()
        .map(|slide| {
            button(Space::new())
                .width(Length::Fixed(sizing::CAROUSEL_DOT))
                .height(Length::Fixed(sizing::CAROUSEL_DOT))
                .padding(0.0)
                .style(styles::button::dot(slide == current))
                .on_press(Message::JumpTo(slide))
                .into()
        })
        .collect();

    container(Row::with_children(dots).spacing(spacing::XS))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
