// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.
//!
//! Styles receive the active Iced [`Theme`]; [`ColorScheme::of`] maps it back
//! to the matching scheme so every widget draws from the same palette.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::Deserialize;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub page_background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub chrome: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    pub border: Color,

    // Brand colors
    pub brand_mark: Color,
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub brand_active: Color,
    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_50,
            surface: palette::WHITE,
            surface_muted: palette::GRAY_200,
            chrome: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_primary: palette::INK,
            text_secondary: palette::GRAY_600,
            text_tertiary: palette::GRAY_500,

            border: palette::GRAY_300,

            brand_mark: palette::DANNEBROG_RED,
            brand_primary: palette::PRIMARY_500,
            brand_hover: palette::PRIMARY_700,
            brand_active: palette::PRIMARY_400,
            accent: palette::ACCENT,

            error: palette::PRIMARY_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            surface: palette::GRAY_800,
            surface_muted: palette::GRAY_600,
            chrome: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },

            text_primary: palette::PAPER,
            text_secondary: palette::GRAY_300,
            text_tertiary: palette::GRAY_500,

            border: palette::GRAY_600,

            brand_mark: palette::DANNEBROG_RED,
            brand_primary: palette::DANNEBROG_RED,
            brand_hover: palette::PRIMARY_500,
            brand_active: palette::PRIMARY_400,
            accent: palette::ACCENT,

            error: palette::PRIMARY_400,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// The scheme matching the active Iced theme.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
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
            // The reading layout is designed light-first.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced theme to run the application with.
    #[must_use]
    pub fn theme(self) -> Theme {
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
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2);
    }

    #[test]
    fn both_themes_use_dannebrog_red_mark() {
        assert_eq!(ColorScheme::light().brand_mark, palette::DANNEBROG_RED);
        assert_eq!(ColorScheme::dark().brand_mark, palette::DANNEBROG_RED);
        assert!(ColorScheme::light().brand_primary.r > ColorScheme::light().brand_primary.b);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::of(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::of(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        // System mode depends on the desktop; it must simply not panic.
        let _ = ThemeMode::System.is_dark();
    }
}
