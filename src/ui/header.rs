// SPDX-License-Identifier: MPL-2.0
//! Page header: brand mark, kicker and site title.
//!
//! On wide windows the year form sits at the trailing edge of the header; the
//! caller passes it in as `trailing`.

use crate::config::CONTENT_MAX_WIDTH;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a, Message> {
    pub i18n: &'a I18n,
    pub trailing: Option<Element<'a, Message>>,
}

/// Renders the header bar.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a, Message>) -> Element<'a, Message> {
    let kicker = Text::new(ctx.i18n.tr("header-kicker").to_uppercase())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_secondary),
        });
    let title = Text::new(ctx.i18n.tr("header-title"))
        .size(typography::TITLE_SM)
        .font(Font {
            weight: iced::font::Weight::Semibold,
            ..Font::DEFAULT
        });

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand_mark())
        .push(Column::new().push(kicker).push(title))
        .push(Space::new().width(Length::Fill));

    if let Some(trailing) = ctx.trailing {
        row = row.push(trailing);
    }

    let inner = Container::new(row)
        .max_width(CONTENT_MAX_WIDTH)
        .padding([spacing::MD, spacing::LG]);

    Container::new(inner)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(styles::container::chrome)
        .into()
}

/// Red rounded square with a white Nordic cross.
fn brand_mark<'a, Message: 'a>() -> Element<'a, Message> {
    let bar = |width: Length, height: Length| {
        Container::new(Space::new().width(width).height(height)).style(|_theme: &Theme| {
            container::Style {
                background: Some(iced::Background::Color(palette::WHITE)),
                ..Default::default()
            }
        })
    };

    // Vertical bar sits left of center, as on the flag.
    let vertical = Row::new()
        .push(Space::new().width(Length::FillPortion(3)))
        .push(bar(Length::FillPortion(1), Length::Fill))
        .push(Space::new().width(Length::FillPortion(5)));
    let horizontal = Column::new()
        .push(Space::new().height(Length::FillPortion(3)))
        .push(bar(Length::Fill, Length::FillPortion(1)))
        .push(Space::new().height(Length::FillPortion(3)));

    Container::new(iced::widget::Stack::new().push(vertical).push(horizontal))
        .width(Length::Fixed(sizing::BRAND_MARK))
        .height(Length::Fixed(sizing::BRAND_MARK))
        .style(styles::container::brand_mark)
        .into()
}
