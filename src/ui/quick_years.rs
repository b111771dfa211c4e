// SPDX-License-Identifier: MPL-2.0
//! Quick-select row of the years listed in the manifest.

use crate::domain::Year;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Row, Text};
use iced::{Element, Length, Theme};

/// View model of one chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickYearButton {
    pub year: Year,
    /// Whether this chip shows the selected year.
    pub pressed: bool,
    /// Descriptive label, e.g. "Vælg år 2023 (aktivt)".
    pub label: String,
    pub tooltip: String,
}

impl QuickYearButton {
    /// Tooltip body: the short hint above the descriptive label.
    #[must_use]
    pub fn tooltip_text(&self) -> String {
        format!("{}\n{}", self.tooltip, self.label)
    }
}

/// Builds one chip per year, in the given order.
#[must_use]
pub fn buttons(years: &[Year], selected: Year, i18n: &I18n) -> Vec<QuickYearButton> {
    years
        .iter()
        .map(|&year| {
            let pressed = year == selected;
            let value = year.to_string();
            let args = [("year", value.as_str())];
            let (label_key, tooltip_key) = if pressed {
                ("quick-year-label-active", "quick-year-tooltip-active")
            } else {
                ("quick-year-label", "quick-year-tooltip")
            };
            QuickYearButton {
                year,
                pressed,
                label: i18n.tr_with_args(label_key, &args),
                tooltip: i18n.tr(tooltip_key),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Year),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    YearSelected(Year),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Select(year) => Event::YearSelected(year),
    }
}

/// Renders the chips. An empty list renders an empty row.
pub fn view<'a>(buttons: Vec<QuickYearButton>) -> Element<'a, Message> {
    let chips = buttons.into_iter().map(|chip| -> Element<'a, Message> {
        let style: fn(&Theme, button::Status) -> button::Style = if chip.pressed {
            styles::button::chip_selected
        } else {
            styles::button::chip
        };
        let body = button(Text::new(chip.year.to_string()).size(typography::BODY))
            .on_press(Message::Select(chip.year))
            .padding([spacing::XXS, spacing::SM])
            .style(style);
        styles::tooltip::styled(body, chip.tooltip_text(), tooltip::Position::Bottom).into()
    });

    Row::with_children(chips)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}
