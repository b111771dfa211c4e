// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header and footer bars, separated from the page by a hairline.
pub fn chrome(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.chrome)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Rounded square in Dannebrog red.
pub fn brand_mark(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_mark)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The speech card.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: Color {
                a: 0.05,
                ..Color::BLACK
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// A skeleton bar drawn at `alpha` of its full strength.
pub fn skeleton(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha.clamp(0.0, 1.0),
                ..colors.surface_muted
            })),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
