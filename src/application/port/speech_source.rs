// SPDX-License-Identifier: MPL-2.0
//! Speech archive port.
//!
//! The archive is a static store of JSON documents: a manifest of available
//! years and one document per year. [`SpeechSource`] abstracts where they come
//! from so the session logic can be exercised with scripted sources.

use crate::domain::{LoadFailure, ManifestEntry, Speech, Year};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while reading the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The requested document does not exist (HTTP 404).
    NotFound,
    /// The archive answered with another non-success status code.
    Status(u16),
    /// The request could not be completed.
    Network(String),
    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "Document not found"),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status {code}"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Decode(msg) => write!(f, "Invalid document: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for LoadFailure {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => LoadFailure::NotFound,
            FetchError::Status(code) => LoadFailure::Status(code),
            FetchError::Network(msg) | FetchError::Decode(msg) => LoadFailure::Other(msg),
        }
    }
}

// =============================================================================
// SpeechSource Trait
// =============================================================================

/// Boxed future returned by [`SpeechSource`] methods.
pub type SourceFuture<T> = BoxFuture<'static, Result<T, FetchError>>;

/// Read access to the speech archive.
pub trait SpeechSource: Send + Sync + fmt::Debug {
    /// Fetches the raw manifest of available years.
    fn fetch_manifest(&self) -> SourceFuture<Vec<ManifestEntry>>;

    /// Fetches the speech document for `year`.
    fn fetch_speech(&self, year: Year) -> SourceFuture<Speech>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_its_own_failure() {
        assert_eq!(LoadFailure::from(FetchError::NotFound), LoadFailure::NotFound);
    }

    #[test]
    fn status_keeps_the_code() {
        assert_eq!(LoadFailure::from(FetchError::Status(503)), LoadFailure::Status(503));
    }

    #[test]
    fn network_and_decode_keep_the_underlying_message() {
        assert_eq!(
            LoadFailure::from(FetchError::Network("connection refused".into())),
            LoadFailure::Other("connection refused".into())
        );
        assert_eq!(
            LoadFailure::from(FetchError::Decode("expected value at line 1".into())),
            LoadFailure::Other("expected value at line 1".into())
        );
    }

    #[test]
    fn display_mentions_status_code() {
        assert!(FetchError::Status(418).to_string().contains("418"));
    }
}
