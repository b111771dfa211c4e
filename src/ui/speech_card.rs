// SPDX-License-Identifier: MPL-2.0
//! The speech card.
//!
//! The card is a pure function of the speech state and the selected year.
//! [`CardContent::from_state`] picks exactly one branch with strict
//! precedence (loading, failure, speech, empty); [`view`] only draws it.

use crate::domain::{LoadFailure, SpeechState, Year};
use crate::i18n::I18n;
use crate::ui::design_tokens::{motion, opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};
use iced::widget::{text, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Theme};
use std::f32::consts::TAU;
use std::time::Duration;

/// Width fractions (numerator, denominator) and heights of the skeleton bars.
const SKELETON_BARS: [(u16, u16, f32); 6] = [
    (1, 3, sizing::SKELETON_KICKER),
    (2, 3, sizing::SKELETON_HEADING),
    (1, 2, sizing::SKELETON_LINE),
    (1, 1, sizing::SKELETON_LINE),
    (11, 12, sizing::SKELETON_LINE),
    (10, 12, sizing::SKELETON_LINE),
];

const READING_FONT: Font = Font {
    family: iced::font::Family::Serif,
    ..Font::DEFAULT
};

/// What the card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    Skeleton,
    Error {
        heading: String,
        message: String,
    },
    Article {
        date: String,
        title: String,
        byline: Option<String>,
        paragraphs: Vec<String>,
    },
    Empty(String),
}

impl CardContent {
    #[must_use]
    pub fn from_state(state: &SpeechState, year: Year, i18n: &I18n) -> Self {
        match state {
            SpeechState::Loading => CardContent::Skeleton,
            SpeechState::Failed(failure) => {
                let value = year.to_string();
                CardContent::Error {
                    heading: i18n.tr_with_args("speech-error-heading", &[("year", value.as_str())]),
                    message: failure_message(failure, i18n),
                }
            }
            SpeechState::Loaded(speech) => CardContent::Article {
                date: format_date(&speech.date, date_locale(i18n)),
                title: speech.title.clone(),
                byline: speech
                    .monarch()
                    .map(|monarch| i18n.tr_with_args("speech-byline", &[("monarch", monarch)])),
                paragraphs: speech.paragraphs.clone(),
            },
            SpeechState::Idle => CardContent::Empty(i18n.tr("speech-empty")),
        }
    }
}

/// User-facing text of a failure.
#[must_use]
pub fn failure_message(failure: &LoadFailure, i18n: &I18n) -> String {
    match (failure.i18n_key(), failure) {
        (Some(key), _) => i18n.tr(key),
        (None, LoadFailure::Other(message)) => message.clone(),
        (None, _) => i18n.tr("error-speech-generic"),
    }
}

fn date_locale(i18n: &I18n) -> Locale {
    if i18n.current_locale().language.as_str() == "da" {
        Locale::da_DK
    } else {
        Locale::en_US
    }
}

/// Formats a published date in long form, e.g. "31. december 2023".
///
/// Accepts plain ISO dates, naive date-times and RFC 3339 timestamps. Anything
/// else is shown as published.
#[must_use]
pub fn format_date(raw: &str, locale: Locale) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        });

    let Some(date) = date else {
        return raw.to_string();
    };
    let pattern = match locale {
        Locale::da_DK => "%-d. %B %Y",
        _ => "%B %-d, %Y",
    };
    date.format_localized(pattern, locale).to_string()
}

/// Opacity of the skeleton bars `elapsed` into the loading state.
///
/// Starts fully opaque and eases down to [`opacity::SKELETON_MIN`] and back
/// once per pulse period.
#[must_use]
pub fn skeleton_alpha(elapsed: Duration) -> f32 {
    let period = motion::PULSE_PERIOD_MS as f32;
    #[allow(clippy::cast_precision_loss)]
    let phase = (elapsed.as_millis() % u128::from(motion::PULSE_PERIOD_MS)) as f32 / period;
    let wave = 0.5 + 0.5 * (TAU * phase).cos();
    opacity::SKELETON_MIN + (opacity::OPAQUE - opacity::SKELETON_MIN) * wave
}

/// Contextual data needed to render the card.
pub struct ViewContext {
    pub content: CardContent,
    /// Current skeleton opacity, see [`skeleton_alpha`].
    pub pulse: f32,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.content {
        CardContent::Skeleton => skeleton(ctx.pulse),
        CardContent::Error { heading, message } => error_block(heading, message),
        CardContent::Article {
            date,
            title,
            byline,
            paragraphs,
        } => article(date, title, byline, paragraphs),
        CardContent::Empty(message) => Text::new(message)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::of(theme).text_secondary),
            })
            .into(),
    };

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

fn skeleton<'a, Message: 'a>(alpha: f32) -> Element<'a, Message> {
    let bars = SKELETON_BARS
        .iter()
        .map(|&(numerator, denominator, height)| -> Element<'a, Message> {
            let bar = Container::new(Space::new().height(Length::Fixed(height)))
                .width(Length::FillPortion(numerator))
                .style(styles::container::skeleton(alpha));
            let mut row = Row::new().width(Length::Fill).push(bar);
            if numerator < denominator {
                row = row.push(Space::new().width(Length::FillPortion(denominator - numerator)));
            }
            row.into()
        });

    Column::with_children(bars).spacing(spacing::SM).into()
}

fn error_block<'a, Message: 'a>(heading: String, message: String) -> Element<'a, Message> {
    let error_text = |theme: &Theme| text::Style {
        color: Some(ColorScheme::of(theme).error),
    };
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(heading)
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: iced::font::Weight::Semibold,
                    ..Font::DEFAULT
                })
                .style(error_text),
        )
        .push(Text::new(message).size(typography::BODY).style(error_text))
        .into()
}

fn article<'a, Message: 'a>(
    date: String,
    title: String,
    byline: Option<String>,
    paragraphs: Vec<String>,
) -> Element<'a, Message> {
    let muted = |theme: &Theme| text::Style {
        color: Some(ColorScheme::of(theme).text_secondary),
    };

    let mut header = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(date).size(typography::CAPTION).style(muted))
        .push(Text::new(title).size(typography::TITLE_LG).font(Font {
            weight: iced::font::Weight::Bold,
            ..READING_FONT
        }));
    if let Some(byline) = byline {
        header = header.push(Text::new(byline).size(typography::BODY).style(muted));
    }

    let body = paragraphs.into_iter().map(|paragraph| -> Element<'a, Message> {
        Text::new(paragraph)
            .size(typography::READING)
            .line_height(typography::READING_LINE_HEIGHT)
            .font(READING_FONT)
            .into()
    });

    Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(Column::with_children(body).spacing(spacing::MD))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::Speech;

    fn year(value: i32) -> Year {
        Year::new(value).expect("valid year")
    }

    fn danish() -> I18n {
        I18n::new(Some("da".to_string()), &Config::default())
    }

    fn speech() -> Speech {
        Speech {
            year: 2023,
            monarch: "Dronning Margrethe II".into(),
            date: "2023-12-31".into(),
            title: "Nytårstale 2023".into(),
            paragraphs: vec!["Godaften.".into(), "Godt nytår.".into()],
        }
    }

    #[test]
    fn each_state_maps_to_its_own_branch() {
        let i18n = danish();
        let cases = [
            (SpeechState::Loading, "skeleton"),
            (SpeechState::Failed(LoadFailure::NotFound), "error"),
            (SpeechState::Loaded(speech()), "article"),
            (SpeechState::Idle, "empty"),
        ];

        for (state, expected) in cases {
            let branch = match CardContent::from_state(&state, year(2023), &i18n) {
                CardContent::Skeleton => "skeleton",
                CardContent::Error { .. } => "error",
                CardContent::Article { .. } => "article",
                CardContent::Empty(_) => "empty",
            };
            assert_eq!(branch, expected, "{state:?}");
        }
    }

    #[test]
    fn not_found_shows_distinct_message() {
        let content = CardContent::from_state(
            &SpeechState::Failed(LoadFailure::NotFound),
            year(1999),
            &danish(),
        );

        assert_eq!(
            content,
            CardContent::Error {
                heading: "Kunne ikke indlæse talen for 1999.".into(),
                message: "Ingen tale fundet for det år.".into(),
            }
        );
    }

    #[test]
    fn failure_messages_follow_failure_kind() {
        let i18n = danish();
        assert_eq!(
            failure_message(&LoadFailure::Status(500), &i18n),
            "Kunne ikke hente talen."
        );
        assert_eq!(
            failure_message(&LoadFailure::Other("connection reset".into()), &i18n),
            "connection reset"
        );
        assert_eq!(
            failure_message(&LoadFailure::Other(String::new()), &i18n),
            "Noget gik galt"
        );
    }

    #[test]
    fn article_has_date_byline_and_paragraphs_in_order() {
        let content =
            CardContent::from_state(&SpeechState::Loaded(speech()), year(2023), &danish());

        assert_eq!(
            content,
            CardContent::Article {
                date: "31. december 2023".into(),
                title: "Nytårstale 2023".into(),
                byline: Some("Af Dronning Margrethe II".into()),
                paragraphs: vec!["Godaften.".into(), "Godt nytår.".into()],
            }
        );
    }

    #[test]
    fn empty_state_has_placeholder() {
        assert_eq!(
            CardContent::from_state(&SpeechState::Idle, year(2023), &danish()),
            CardContent::Empty("Ingen data at vise.".into())
        );
    }

    #[test]
    fn dates_are_formatted_in_long_form() {
        assert_eq!(format_date("2023-12-31", Locale::da_DK), "31. december 2023");
        assert_eq!(format_date("2024-01-01", Locale::da_DK), "1. januar 2024");
        assert_eq!(
            format_date("2023-12-31T18:00:00+01:00", Locale::da_DK),
            "31. december 2023"
        );
        assert_eq!(format_date("2023-12-31", Locale::en_US), "December 31, 2023");
    }

    #[test]
    fn unparsable_dates_are_shown_verbatim() {
        assert_eq!(format_date("nytårsaften", Locale::da_DK), "nytårsaften");
    }

    #[test]
    fn skeleton_pulse_stays_in_range_and_restarts() {
        let start = skeleton_alpha(Duration::ZERO);
        assert!((start - 1.0).abs() < 1e-4);

        let trough = skeleton_alpha(Duration::from_millis(motion::PULSE_PERIOD_MS / 2));
        assert!((trough - opacity::SKELETON_MIN).abs() < 1e-4);

        let again = skeleton_alpha(Duration::from_millis(motion::PULSE_PERIOD_MS));
        assert!((again - start).abs() < 1e-4);

        for ms in (0..4000).step_by(70) {
            let alpha = skeleton_alpha(Duration::from_millis(ms));
            assert!((opacity::SKELETON_MIN - 1e-4..=1.0 + 1e-4).contains(&alpha));
        }
    }

    #[test]
    fn skeleton_has_six_bars() {
        assert_eq!(SKELETON_BARS.len(), 6);
        assert!(SKELETON_BARS.iter().all(|&(n, d, _)| n <= d));
    }
}
