// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the gallery.

## Organization

- **Palette**: Base and brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, carousel and modal dimensions
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use committee_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

let gap = spacing::LG; // 24px, the grid gutter
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.05, 0.06, 0.09);
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.1, 0.14);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.16, 0.21);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.32, 0.38);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.58, 0.64);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.84, 0.88);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.96);

    // Brand: cyan primary, violet secondary
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.86, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.13, 0.76, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.05, 0.6, 0.75);
    pub const SECONDARY_400: Color = Color::from_rgb(0.7, 0.52, 0.98);
    pub const SECONDARY_500: Color = Color::from_rgb(0.58, 0.36, 0.95);
    pub const SECONDARY_600: Color = Color::from_rgb(0.46, 0.25, 0.82);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.65, 0.14);
    pub const SUCCESS_500: Color = Color::from_rgb(0.2, 0.78, 0.45);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Badge fills over images
    pub const TINT: f32 = 0.2;
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Modal backdrop
    pub const SCRIM: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_XL: f32 = 36.0;

    /// Narrowest a grid card may get before the grid drops a column.
    pub const CARD_MIN_WIDTH: f32 = 300.0;
    /// Grid never shows more columns than this.
    pub const GRID_MAX_COLUMNS: usize = 3;
    /// Height of the 16:9 media strip at the top of event and video cards.
    pub const CARD_MEDIA_HEIGHT: f32 = 190.0;
    /// Height of a 3:4 magazine cover.
    pub const COVER_HEIGHT: f32 = 420.0;
    /// Collapsed event card body height; hovering lifts the limit.
    pub const CARD_BODY_COLLAPSED: f32 = 110.0;

    pub const MODAL_MAX_WIDTH: f32 = 896.0;
    pub const CAROUSEL_HEIGHT: f32 = 460.0;
    pub const CAROUSEL_ARROW: f32 = 40.0;
    pub const CAROUSEL_DOT: f32 = 8.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const DISPLAY: f32 = 44.0;
    /// Modal title
    pub const TITLE_LG: f32 = 26.0;
    /// Card titles
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers inside the modal
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    /// Brand glow behind the active tab.
    pub const GLOW_PRIMARY: Shadow = Shadow {
        color: Color {
            a: 0.45,
            ..palette::PRIMARY_500
        },
        offset: Vector::ZERO,
        blur_radius: 18.0,
    };

    /// Glow behind the active filter.
    pub const GLOW_SECONDARY: Shadow = Shadow {
        color: Color {
            a: 0.45,
            ..palette::SECONDARY_500
        },
        offset: Vector::ZERO,
        blur_radius: 18.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > opacity::OVERLAY_STRONG);

    assert!(sizing::GRID_MAX_COLUMNS >= 1);
    assert!(sizing::MODAL_MAX_WIDTH > sizing::CARD_MIN_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
