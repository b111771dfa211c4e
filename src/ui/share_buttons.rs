// SPDX-License-Identifier: MPL-2.0
//! Share row below the speech.
//!
//! Facebook, X and Bluesky open their share intents in the browser; the
//! parent builds the links. Instagram has no intent and is reported as its
//! own event so the parent can run the clipboard fallback.

use crate::i18n::I18n;
use crate::share::{Platform, ShareLinks};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, tooltip, Column, Row, Text};
use iced::{Element, Font, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Share(Platform),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open this intent URL in the browser.
    OpenIntent(String),
    ShareOnInstagram,
}

pub fn update(message: Message, links: &ShareLinks) -> Event {
    match message {
        Message::Share(platform) => match links.intent(platform) {
            Some(url) => Event::OpenIntent(url),
            None => Event::ShareOnInstagram,
        },
    }
}

pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("share-heading"))
        .size(typography::BODY)
        .font(Font {
            weight: iced::font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_secondary),
        });

    let buttons = Platform::ALL.iter().map(|&platform| -> Element<'a, Message> {
        let body = button(Text::new(platform.label()).size(typography::BODY))
            .on_press(Message::Share(platform))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::chip);
        styles::tooltip::styled(body, i18n.tr(platform.tooltip_key()), tooltip::Position::Top)
            .into()
    });

    Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(
            Row::with_children(buttons)
                .spacing(spacing::XS)
                .wrap()
                .vertical_spacing(spacing::XS),
        )
        .into()
}
