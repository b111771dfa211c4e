// SPDX-License-Identifier: MPL-2.0
//! Normalization of the available-years manifest.
//!
//! `/assets/years.json` is a loosely typed JSON array: entries may be numbers
//! or numeric strings, and hand-edited files have contained duplicates and
//! stray values. [`normalize_years`] turns it into the ordered list the
//! quick-select row shows.

use super::year::Year;
use serde::Deserialize;

/// A single raw entry of the manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Number(f64),
    Text(String),
    /// Any other JSON value (null, bool, object, array). Never a year.
    Other(serde::de::IgnoredAny),
}

impl ManifestEntry {
    /// Coerces the entry into a year, if it denotes one.
    #[must_use]
    pub fn to_year(&self) -> Option<Year> {
        match self {
            ManifestEntry::Number(n) => Year::from_number(*n),
            ManifestEntry::Text(s) => Year::parse(s),
            ManifestEntry::Other(_) => None,
        }
    }
}

impl From<i32> for ManifestEntry {
    fn from(value: i32) -> Self {
        ManifestEntry::Number(f64::from(value))
    }
}

impl From<&str> for ManifestEntry {
    fn from(value: &str) -> Self {
        ManifestEntry::Text(value.to_string())
    }
}

/// Coerces, range-filters, deduplicates and sorts the manifest, most recent
/// year first.
#[must_use]
pub fn normalize_years<'a, I>(entries: I) -> Vec<Year>
where
    I: IntoIterator<Item = &'a ManifestEntry>,
{
    let mut years: Vec<Year> = entries.into_iter().filter_map(ManifestEntry::to_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
