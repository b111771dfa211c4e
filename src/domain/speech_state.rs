// SPDX-License-Identifier: MPL-2.0
//! State of the speech fetch.
//!
//! A single tagged state replaces independent loading/error/speech flags, so
//! "loading with an error" or "error with a speech" cannot be represented.

use super::speech::Speech;

/// Why a speech could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The archive has no document for the requested year (HTTP 404).
    NotFound,
    /// The archive answered with another non-success status.
    Status(u16),
    /// Network or decoding failure, with the underlying message.
    ///
    /// The message may be empty when the failure carried none.
    Other(String),
}

impl LoadFailure {
    /// The i18n key of the user-facing message, or `None` when the underlying
    /// message should be shown as-is.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            LoadFailure::NotFound => Some("error-speech-not-found"),
            LoadFailure::Status(_) => Some("error-speech-fetch-failed"),
            LoadFailure::Other(message) if message.trim().is_empty() => {
                Some("error-speech-generic")
            }
            LoadFailure::Other(_) => None,
        }
    }
}

/// Lifecycle of the speech for the selected year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeechState {
    /// Nothing requested yet, or nothing to show.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Failed(LoadFailure),
    /// The last fetch succeeded.
    Loaded(Speech),
}

impl SpeechState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SpeechState::Loading)
    }

    #[must_use]
    pub fn speech(&self) -> Option<&Speech> {
        match self {
            SpeechState::Loaded(speech) => Some(speech),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            SpeechState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
