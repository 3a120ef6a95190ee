// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, border: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Active tab: brand fill with a glow.
pub fn tab_selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::PRIMARY_500,
            shadow::GLOW_PRIMARY,
        ),
        _ => filled(
            palette::PRIMARY_500,
            palette::PRIMARY_600,
            shadow::GLOW_PRIMARY,
        ),
    }
}

/// Active event filter: secondary fill with a glow.
pub fn filter_selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => filled(
            palette::SECONDARY_400,
            palette::SECONDARY_500,
            shadow::GLOW_SECONDARY,
        ),
        _ => filled(
            palette::SECONDARY_500,
            palette::SECONDARY_600,
            shadow::GLOW_SECONDARY,
        ),
    }
}

/// Inactive tab or filter: transparent until hovered.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.border
            })),
            colors.text_primary,
        ),
        _ => (None, colors.text_muted),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Whole-card buttons: no chrome of their own, the card container draws it.
pub fn card(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: ColorScheme::for_theme(theme).text_primary,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Buttons drawn over images (carousel arrows).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Carousel position dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::PRIMARY_500
        } else if matches!(status, button::Status::Hovered) {
            Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            }
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tab_uses_brand_color() {
        let style = tab_selected(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn selected_filter_uses_secondary_color() {
        let style = filter_selected(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::SECONDARY_500))
        );
    }

    #[test]
    fn ghost_is_transparent_until_hovered() {
        assert!(ghost(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(ghost(&Theme::Dark, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_STRONG);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_dot_is_highlighted() {
        let active = dot(true)(&Theme::Dark, button::Status::Active);
        let inactive = dot(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.background, Some(Background::Color(palette::PRIMARY_500)));
        assert_ne!(active.background, inactive.background);
    }
}
