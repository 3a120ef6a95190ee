// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the color scheme derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_page: Color,
    pub surface_card: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub success: Color,
    pub warning: Color,

    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_100,
            surface_card: palette::WHITE,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_muted: palette::GRAY_700,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::SECONDARY_600,

            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,

            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_950,
            surface_card: palette::GRAY_900,
            border: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::SECONDARY_500,

            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,

            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching the active Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Next mode in the header toggle cycle: system → light → dark → system.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// The built-in Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_cards() {
        assert!(ColorScheme::light().surface_card.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_cards() {
        assert!(ColorScheme::dark().surface_card.r < 0.2);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert!(ColorScheme::for_theme(&Theme::Dark).surface_card.r < 0.2);
        assert!(ColorScheme::for_theme(&Theme::Light).surface_card.r > 0.9);
    }

    #[test]
    fn toggle_cycles_through_all_modes() {
        let mut mode = ThemeMode::System;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        let _ = ThemeMode::System.iced_theme();
    }
}
