// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (the year form's submit button).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        button::Status::Active => colors.brand_primary,
        button::Status::Disabled => colors.surface_muted,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Selected quick-select chip.
pub fn chip_selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        _ => colors.brand_active,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Unselected quick-select chip, also used for the share buttons.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let (background, border_color) = match status {
        button::Status::Hovered => (colors.page_background, colors.accent),
        button::Status::Pressed => (colors.surface_muted, colors.accent),
        _ => (colors.surface, colors.border),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Text link without a button surface (footer author link).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        _ => colors.text_tertiary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Close button on toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 1.0,
        _ => 0.6,
    };

    button::Style {
        background: None,
        text_color: Color {
            a: alpha,
            ..colors.text_secondary
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
