// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (Dannebrog red, royal accents, neutral grays)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation timings

## Examples

```
use nytaarstale::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let header_bg = Color {
    a: opacity::SURFACE,
    ..palette::PAPER
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (neutral scale)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.090, 0.090, 0.090);
    pub const GRAY_800: Color = Color::from_rgb(0.149, 0.149, 0.149);
    pub const GRAY_600: Color = Color::from_rgb(0.322, 0.322, 0.322);
    pub const GRAY_500: Color = Color::from_rgb(0.451, 0.451, 0.451);
    pub const GRAY_300: Color = Color::from_rgb(0.831, 0.831, 0.831);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.898, 0.898);
    pub const GRAY_50: Color = Color::from_rgb(0.980, 0.980, 0.980);

    /// Dannebrog red, used for the brand mark.
    pub const DANNEBROG_RED: Color = Color::from_rgb8(0xC8, 0x10, 0x2E);

    // Royal scale
    pub const PRIMARY_400: Color = Color::from_rgb8(0xF8, 0x71, 0x71); // Active chip
    pub const PRIMARY_500: Color = Color::from_rgb8(0x8B, 0x0F, 0x26);
    pub const PRIMARY_700: Color = Color::from_rgb8(0x6E, 0x0A, 0x1F);
    pub const ACCENT: Color = Color::from_rgb8(0xC5, 0xA4, 0x6D);
    pub const INK: Color = Color::from_rgb8(0x1C, 0x24, 0x31);
    pub const PAPER: Color = Color::from_rgb8(0xF7, 0xF4, 0xEF);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.725, 0.110, 0.110);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OPAQUE: f32 = 1.0;

    /// Header and footer background over the page.
    pub const SURFACE: f32 = 0.9;

    /// Lowest opacity of the pulsing skeleton.
    pub const SKELETON_MIN: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Square brand mark in the header.
    pub const BRAND_MARK: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the year input.
    pub const YEAR_INPUT_WIDTH: f32 = 112.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    // Skeleton bars
    pub const SKELETON_LINE: f32 = 16.0;
    pub const SKELETON_HEADING: f32 = 40.0;
    pub const SKELETON_KICKER: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: speech title and brand
    //! - Body: speech paragraphs and UI text
    //! - Caption: kicker lines, footer and chips

    /// Speech title.
    pub const TITLE_LG: f32 = 30.0;

    /// Brand name in the header.
    pub const TITLE_SM: f32 = 16.0;

    /// Speech paragraphs.
    pub const READING: f32 = 17.0;

    /// Line height factor of speech paragraphs.
    pub const READING_LINE_HEIGHT: f32 = 1.9;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Separators, chips, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.12);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 25.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Full period of the skeleton pulse, in milliseconds.
    pub const PULSE_PERIOD_MS: u64 = 2000;

    /// Interval of the animation tick, in milliseconds.
    pub const TICK_MS: u64 = 100;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::SKELETON_MIN > 0.0 && opacity::SKELETON_MIN < 1.0);

    // Sizing validation
    assert!(sizing::SKELETON_HEADING > sizing::SKELETON_KICKER);
    assert!(sizing::SKELETON_KICKER > sizing::SKELETON_LINE);

    // Typography validation
    assert!(typography::TITLE_LG > typography::READING);
    assert!(typography::READING > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::TICK_MS < motion::PULSE_PERIOD_MS);

    // Color validation
    assert!(palette::DANNEBROG_RED.r >= 0.0 && palette::DANNEBROG_RED.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
