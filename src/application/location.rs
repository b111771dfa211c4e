// SPDX-License-Identifier: MPL-2.0
//! The location URL of the reader.
//!
//! The reader keeps a page URL (for example `https://nytaarstale.dk/?year=2022`)
//! that acts as its address: the `year` query parameter seeds the initial
//! selection, is rewritten in place whenever the user picks a year, and is
//! what gets shared.

use crate::domain::Year;
use reqwest::Url;

/// Name of the query parameter carrying the selected year.
pub const YEAR_PARAM: &str = "year";

/// Current location of the reader. May be unknown when no valid URL was
/// configured; every operation then degrades to a no-op or a relative link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    url: Option<Url>,
}

impl Location {
    /// Parses `raw` into a location; an unparsable URL yields an unknown
    /// location.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw.trim()) {
            Ok(url) => Self { url: Some(url) },
            Err(err) => {
                tracing::warn!(url = raw, error = %err, "ignoring invalid location URL");
                Self::default()
            }
        }
    }

    /// Returns the full URL, if known.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Reads the `year` query parameter, if present and valid.
    #[must_use]
    pub fn year(&self) -> Option<Year> {
        self.url
            .as_ref()?
            .query_pairs()
            .find(|(key, _)| key == YEAR_PARAM)
            .and_then(|(_, value)| Year::parse(&value))
    }

    /// Rewrites the `year` query parameter in place.
    ///
    /// The location is replaced rather than extended: no history of previous
    /// locations is kept. Does nothing when the location is unknown.
    pub fn replace_year(&mut self, year: Year) {
        match self.url.as_mut() {
            Some(url) => set_query_param(url, YEAR_PARAM, &year.to_string()),
            None => tracing::debug!(%year, "no location to update"),
        }
    }

    /// Returns a shareable link to `year` without changing the location.
    ///
    /// Falls back to the relative link `?year={year}` when the location is
    /// unknown.
    #[must_use]
    pub fn link_for(&self, year: Year) -> String {
        match &self.url {
            Some(url) => {
                let mut url = url.clone();
                set_query_param(&mut url, YEAR_PARAM, &year.to_string());
                url.to_string()
            }
            None => format!("?{YEAR_PARAM}={year}"),
        }
    }
}

/// Sets `key` to `value`, replacing the first occurrence in place, dropping
/// later duplicates and appending when absent.
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (k, v) in url.query_pairs() {
        if k == key {
            if !replaced {
                pairs.push((k.into_owned(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: i32) -> Year {
        Year::new(value).expect("valid year")
    }

    #[test]
    fn year_is_read_from_query() {
        let location = Location::parse("https://nytaarstale.dk/?year=2022");
        assert_eq!(location.year(), Some(year(2022)));
    }

    #[test]
    fn out_of_range_or_malformed_query_is_ignored() {
        for raw in [
            "https://nytaarstale.dk/?year=1500",
            "https://nytaarstale.dk/?year=abc",
            "https://nytaarstale.dk/",
        ] {
            assert_eq!(Location::parse(raw).year(), None, "{raw}");
        }
    }

    #[test]
    fn replace_year_round_trips() {
        let mut location = Location::parse("https://nytaarstale.dk/");
        location.replace_year(year(2022));

        assert_eq!(location.url().map(Url::as_str), Some("https://nytaarstale.dk/?year=2022"));

        let reloaded = Location::parse(location.url().expect("known location").as_str());
        assert_eq!(reloaded.year(), Some(year(2022)));
    }

    #[test]
    fn replace_year_keeps_other_parameters_in_order() {
        let mut location = Location::parse("https://nytaarstale.dk/?lang=da&year=2020&ref=x&year=2019");
        location.replace_year(year(2023));

        assert_eq!(
            location.url().map(Url::as_str),
            Some("https://nytaarstale.dk/?lang=da&year=2023&ref=x")
        );
    }

    #[test]
    fn unknown_location_degrades_gracefully() {
        let mut location = Location::parse("not a url");
        assert!(location.url().is_none());

        location.replace_year(year(2022));
        assert!(location.url().is_none());
        assert_eq!(location.link_for(year(2022)), "?year=2022");
    }

    #[test]
    fn link_for_does_not_mutate_location() {
        let location = Location::parse("https://nytaarstale.dk/?year=2020");
        let link = location.link_for(year(2021));

        assert_eq!(link, "https://nytaarstale.dk/?year=2021");
        assert_eq!(location.year(), Some(year(2020)));
    }
}
