// SPDX-License-Identifier: MPL-2.0
//! Page footer with the copyright line and the author link.

use crate::config::{AUTHOR_NAME, AUTHOR_URL, CONTENT_MAX_WIDTH};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, tooltip, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Year shown in the copyright line.
    pub current_year: i32,
}

#[derive(Debug, Clone)]
pub enum Message {
    AuthorLinkPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenUrl(String),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::AuthorLinkPressed => Event::OpenUrl(AUTHOR_URL.to_string()),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let year = ctx.current_year.to_string();
    let copyright = Text::new(
        ctx.i18n
            .tr_with_args("footer-copyright", &[("year", year.as_str())]),
    )
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(ColorScheme::of(theme).text_tertiary),
    });

    let author = button(Text::new(AUTHOR_NAME).size(typography::CAPTION))
        .on_press(Message::AuthorLinkPressed)
        .padding(0.0)
        .style(styles::button::link);
    let author = styles::tooltip::styled(
        author,
        ctx.i18n
            .tr_with_args("footer-author-tooltip", &[("url", AUTHOR_URL)]),
        tooltip::Position::Top,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(copyright)
        .push(Space::new().width(Length::Fill))
        .push(author);

    Container::new(
        Container::new(row)
            .max_width(CONTENT_MAX_WIDTH)
            .padding([spacing::MD, spacing::LG]),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(styles::container::chrome)
    .into()
}
