// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header band behind the title.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.surface_card
        })),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Grid card and the pill bars holding tabs and filters.
///
/// `highlighted` draws the brand border used while the pointer is over a card.
pub fn card(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_card)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: if highlighted {
                    colors.brand_primary
                } else {
                    colors.border
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: if highlighted { shadow::LG } else { shadow::SM },
            ..Default::default()
        }
    }
}

/// Modal panel, fully opaque so clicks never reach the backdrop.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Gray area shown behind images while they load or when they failed.
pub fn media_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.border)),
        text_color: Some(colors.text_muted),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status badge tinted with `color`.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
