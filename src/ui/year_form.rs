// SPDX-License-Identifier: MPL-2.0
//! Manual year entry.
//!
//! The form owns its draft text. The draft is seeded once from the year that
//! was selected at startup and is not overwritten when the selection changes
//! later, so a half-typed year survives a quick-select click.

use crate::domain::Year;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Longest draft accepted; every valid year has four digits.
const MAX_DRAFT_LEN: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct State {
    draft: String,
}

impl State {
    /// Creates the form seeded with `default_year`.
    #[must_use]
    pub fn new(default_year: Year) -> Self {
        Self {
            draft: default_year.to_string(),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user submitted the draft. Validation is left to the receiver.
    Submitted(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::DraftChanged(value) => {
            // Mirrors a numeric field: digits and sign only.
            if value.len() <= MAX_DRAFT_LEN
                && value.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '+')
            {
                state.draft = value;
            }
            Event::None
        }
        Message::Submit => Event::Submitted(state.draft.clone()),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("year-form-label"), &state.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fixed(sizing::YEAR_INPUT_WIDTH))
        .style(styles::text_input::year);

    let submit = button(Text::new(i18n.tr("year-form-submit")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit)
        .into()
}
