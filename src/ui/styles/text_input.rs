// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// The year input: white field with a hairline that turns gold when focused.
pub fn year(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::of(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } => colors.accent,
        text_input::Status::Hovered => colors.text_tertiary,
        _ => colors.border,
    };

    text_input::Style {
        background: Background::Color(colors.surface),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        icon: colors.text_tertiary,
        placeholder: colors.text_tertiary,
        value: colors.text_primary,
        selection: Color {
            a: 0.3,
            ..colors.accent
        },
    }
}
