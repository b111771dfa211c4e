// SPDX-License-Identifier: MPL-2.0
//! Year selection and speech-fetch state machine.
//!
//! The [`Session`] owns everything the reader shows: the selected year, the
//! state of the speech fetch, the available years and the location URL. It
//! performs no I/O. Operations that need a document return a [`LoadTicket`];
//! the caller fetches the speech for `ticket.year()` and hands the outcome back
//! to [`Session::apply_speech`].
//!
//! Every new load bumps a generation counter. A completion whose ticket is not
//! of the current generation is stale and is dropped without touching state,
//! so a slow response for an earlier selection can never overwrite a newer
//! one.

use super::location::Location;
use super::port::FetchError;
use crate::domain::{normalize_years, ManifestEntry, Speech, SpeechState, Year};

/// Identifies one speech load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    year: Year,
}

impl LoadTicket {
    /// The year whose document must be fetched.
    #[must_use]
    pub fn year(self) -> Year {
        self.year
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Root state of the reader.
#[derive(Debug, Clone)]
pub struct Session {
    year: Year,
    speech: SpeechState,
    available_years: Vec<Year>,
    location: Location,
    generation: u64,
}

impl Session {
    /// Creates a session whose year comes from the location, or defaults to
    /// the year before `calendar_year`.
    #[must_use]
    pub fn new(location: Location, calendar_year: i32) -> Self {
        let year = location
            .year()
            .unwrap_or_else(|| Year::preceding(calendar_year));

        Self {
            year,
            speech: SpeechState::Idle,
            available_years: Vec::new(),
            location,
            generation: 0,
        }
    }

    /// Starts the load of the initial year.
    pub fn start(&mut self) -> LoadTicket {
        self.begin_load()
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn speech_state(&self) -> &SpeechState {
        &self.speech
    }

    /// Years for the quick-select row, most recent first. Empty until the
    /// manifest has loaded, and after a failed manifest load.
    #[must_use]
    pub fn available_years(&self) -> &[Year] {
        &self.available_years
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Selects `year` and rewrites the location's `year` parameter.
    ///
    /// Returns a ticket when the selection changed the year; re-selecting the
    /// current year only updates the location.
    pub fn select_year(&mut self, year: Year) -> Option<LoadTicket> {
        self.location.replace_year(year);

        if year == self.year {
            return None;
        }
        tracing::info!(from = %self.year, to = %year, "year selected");
        self.year = year;
        Some(self.begin_load())
    }

    /// Handles a submission of the year form.
    ///
    /// Input that is not a year inside `(1800, 3000)` is ignored.
    pub fn submit_year(&mut self, input: &str) -> Option<LoadTicket> {
        match Year::parse(input) {
            Some(year) => self.select_year(year),
            None => {
                tracing::debug!(input, "ignoring invalid year submission");
                None
            }
        }
    }

    /// Applies the outcome of the manifest load.
    ///
    /// On success the years are normalized and stored; when the selected year
    /// is not among a non-empty result, the selection snaps to the most recent
    /// year and a ticket for it is returned. Failures leave the list empty and
    /// are not surfaced to the user.
    pub fn apply_manifest(
        &mut self,
        result: Result<Vec<ManifestEntry>, FetchError>,
    ) -> Option<LoadTicket> {
        let entries = match result {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "could not load the years manifest");
                return None;
            }
        };

        self.available_years = normalize_years(&entries);
        tracing::debug!(count = self.available_years.len(), "manifest loaded");

        let latest = *self.available_years.first()?;
        if self.available_years.contains(&self.year) {
            return None;
        }
        tracing::info!(from = %self.year, to = %latest, "selected year not in manifest");
        self.year = latest;
        Some(self.begin_load())
    }

    /// Applies the outcome of a speech load.
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn apply_speech(&mut self, ticket: LoadTicket, result: Result<Speech, FetchError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(year = %ticket.year, "dropping stale speech response");
            return false;
        }

        self.speech = match result {
            Ok(speech) => SpeechState::Loaded(speech),
            Err(err) => {
                tracing::warn!(year = %ticket.year, error = %err, "speech load failed");
                SpeechState::Failed(err.into())
            }
        };
        true
    }

    /// The ticket of the load in flight, if any.
    #[must_use]
    pub fn pending_load(&self) -> Option<LoadTicket> {
        self.speech.is_loading().then_some(LoadTicket {
            generation: self.generation,
            year: self.year,
        })
    }

    fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.speech = SpeechState::Loading;
        LoadTicket {
            generation: self.generation,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LoadFailure;

    fn year(value: i32) -> Year {
        Year::new(value).expect("valid year")
    }

    fn speech(value: i32) -> Speech {
        Speech {
            year: value,
            monarch: "Kong Frederik X".into(),
            date: format!("{value}-12-31"),
            title: format!("Nytårstale {value}"),
            paragraphs: vec!["Godaften.".into()],
        }
    }

    fn session_at(raw_location: &str) -> Session {
        Session::new(Location::parse(raw_location), 2026)
    }

    #[test]
    fn initial_year_comes_from_location() {
        let session = session_at("https://nytaarstale.dk/?year=2022");
        assert_eq!(session.year(), year(2022));
    }

    #[test]
    fn initial_year_defaults_to_previous_calendar_year() {
        assert_eq!(session_at("https://nytaarstale.dk/").year(), year(2025));
        assert_eq!(session_at("https://nytaarstale.dk/?year=1500").year(), year(2025));
    }

    #[test]
    fn start_enters_loading_for_initial_year() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        let ticket = session.start();

        assert_eq!(ticket.year(), year(2022));
        assert!(session.speech_state().is_loading());
        assert_eq!(session.pending_load(), Some(ticket));
    }

    #[test]
    fn pending_load_tracks_latest_ticket() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        assert!(session.pending_load().is_none());

        let first = session.start();
        assert_eq!(session.pending_load(), Some(first));

        let second = session.select_year(year(2023)).expect("year changed");
        assert_eq!(session.pending_load(), Some(second));

        session.apply_speech(second, Ok(speech(2023)));
        assert!(session.pending_load().is_none());
    }

    #[test]
    fn successful_load_stores_speech() {
        let mut session = session_at("https://nytaarstale.dk/");
        let ticket = session.start();

        assert!(session.apply_speech(ticket, Ok(speech(2025))));
        assert_eq!(session.speech_state().speech(), Some(&speech(2025)));
    }

    #[test]
    fn not_found_yields_failure_without_speech() {
        let mut session = session_at("https://nytaarstale.dk/?year=1999");
        let ticket = session.start();

        session.apply_speech(ticket, Err(FetchError::NotFound));
        assert_eq!(
            session.speech_state(),
            &SpeechState::Failed(LoadFailure::NotFound)
        );
        assert!(session.speech_state().speech().is_none());
    }

    #[test]
    fn stale_response_never_overwrites_newer_selection() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        let _initial = session.start();

        let slow = session.select_year(year(2023)).expect("year changed");
        let fast = session.select_year(year(2024)).expect("year changed");

        assert!(session.apply_speech(fast, Ok(speech(2024))));
        assert!(!session.apply_speech(slow, Ok(speech(2023))));

        assert_eq!(session.year(), year(2024));
        assert_eq!(session.speech_state().speech(), Some(&speech(2024)));
    }

    #[test]
    fn stale_failure_does_not_replace_loading_state() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        let first = session.start();
        let _second = session.select_year(year(2021)).expect("year changed");

        assert!(!session.apply_speech(first, Err(FetchError::Status(500))));
        assert!(session.speech_state().is_loading());
    }

    #[test]
    fn selecting_updates_location() {
        let mut session = session_at("https://nytaarstale.dk/");
        session.select_year(year(2022));

        assert_eq!(session.location().year(), Some(year(2022)));
        assert_eq!(
            session.location().url().map(|u| u.as_str()),
            Some("https://nytaarstale.dk/?year=2022")
        );
    }

    #[test]
    fn reselecting_current_year_does_not_reload() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        let ticket = session.start();
        session.apply_speech(ticket, Ok(speech(2022)));

        assert!(session.select_year(year(2022)).is_none());
        assert!(session.speech_state().speech().is_some());
    }

    #[test]
    fn invalid_submissions_leave_year_unchanged() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        session.start();

        for input in ["abc", "500", "5000", "", "2022.5"] {
            assert!(session.submit_year(input).is_none(), "{input:?}");
            assert_eq!(session.year(), year(2022));
        }
        assert_eq!(session.location().year(), Some(year(2022)));
    }

    #[test]
    fn valid_submission_selects_year() {
        let mut session = session_at("https://nytaarstale.dk/");
        let ticket = session.submit_year(" 2019 ").expect("valid year");

        assert_eq!(ticket.year(), year(2019));
        assert_eq!(session.year(), year(2019));
        assert_eq!(session.location().year(), Some(year(2019)));
    }

    #[test]
    fn manifest_is_normalized() {
        let mut session = session_at("https://nytaarstale.dk/?year=2023");
        session.start();
        let entries = vec![
            ManifestEntry::from("2024"),
            ManifestEntry::from("2023"),
            ManifestEntry::from(2022),
            ManifestEntry::from(1500),
            ManifestEntry::from(9999),
        ];

        assert!(session.apply_manifest(Ok(entries)).is_none());
        assert_eq!(session.available_years(), &[year(2024), year(2023), year(2022)]);
    }

    #[test]
    fn manifest_without_selected_year_snaps_to_latest() {
        let mut session = session_at("https://nytaarstale.dk/?year=2001");
        let initial = session.start();

        let snapped = session
            .apply_manifest(Ok(vec![ManifestEntry::from(2023), ManifestEntry::from(2024)]))
            .expect("selection snapped");

        assert_eq!(snapped.year(), year(2024));
        assert_eq!(session.year(), year(2024));
        assert!(!session.apply_speech(initial, Err(FetchError::NotFound)));
        assert!(session.speech_state().is_loading());
    }

    #[test]
    fn empty_manifest_keeps_selection() {
        let mut session = session_at("https://nytaarstale.dk/?year=2001");
        session.start();

        assert!(session.apply_manifest(Ok(Vec::new())).is_none());
        assert_eq!(session.year(), year(2001));
    }

    #[test]
    fn manifest_failure_is_swallowed() {
        let mut session = session_at("https://nytaarstale.dk/?year=2022");
        let ticket = session.start();

        assert!(session
            .apply_manifest(Err(FetchError::Network("offline".into())))
            .is_none());
        assert!(session.available_years().is_empty());
        assert_eq!(session.pending_load(), Some(ticket));
    }
}
