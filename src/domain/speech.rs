// SPDX-License-Identifier: MPL-2.0
//! The speech document as published in the archive.

use serde::{Deserialize, Serialize};

/// A year-end address.
///
/// Matches the JSON documents served at `/assets/{year}.json`. The `date` is
/// kept as published (an ISO date, possibly with a time part) and formatted
/// at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    pub year: i32,
    pub monarch: String,
    pub date: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Speech {
    /// Returns the title, or `None` when the document has an empty one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        Some(self.title.trim()).filter(|t| !t.is_empty())
    }

    /// Returns the monarch, or `None` when the document has an empty one.
    #[must_use]
    pub fn monarch(&self) -> Option<&str> {
        Some(self.monarch.trim()).filter(|m| !m.is_empty())
    }
}
