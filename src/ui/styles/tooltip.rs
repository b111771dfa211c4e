// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips carry the active/inactive hints of the quick-select chips and the
//! "share on ..." captions, so they must stay legible on both themes.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted surface: ink on light pages, paper on dark ones.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    let (bg_color, text_color) = (colors.text_primary, colors.surface);

    container::Style {
        background: Some(Background::Color(Color { a: 0.96, ..bg_color })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color { a: 0.3, ..colors.border },
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` at `position`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
