// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the speech archive.
//!
//! Reads `assets/years.json` and `assets/{year}.json` relative to a base URL,
//! with caching disabled on every request so an updated archive is picked up
//! immediately.

use crate::application::port::{FetchError, SourceFuture, SpeechSource};
use crate::domain::{ManifestEntry, Speech, Year};
use crate::error::{Error, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("Nytaarstale/", env!("CARGO_PKG_VERSION"));

/// Directory of the archive below the base URL.
const ASSETS_DIR: &str = "assets";

/// Speech archive served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSpeechSource {
    client: Client,
    base: Url,
}

impl HttpSpeechSource {
    /// Creates a source for the archive hosted at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the HTTP client cannot be built and
    /// [`Error::Config`] when `base` cannot hold a path.
    pub fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("{base} cannot be used as archive URL")));
        }
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }

    /// Parses `base` and creates a source for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `base` is not a valid URL.
    pub fn from_str_url(base: &str) -> Result<Self> {
        let url = Url::parse(base).map_err(|e| Error::Config(format!("{base}: {e}")))?;
        Self::new(url)
    }

    /// URL of the available-years manifest.
    #[must_use]
    pub fn manifest_url(&self) -> Url {
        self.asset_url("years.json")
    }

    /// URL of the speech document for `year`.
    #[must_use]
    pub fn speech_url(&self, year: Year) -> Url {
        self.asset_url(&format!("{year}.json"))
    }

    fn asset_url(&self, file: &str) -> Url {
        let mut url = self.base.clone();
        // The base always ends with a slash, so both pushes extend its path.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(ASSETS_DIR).push(file);
        }
        url
    }
}

impl SpeechSource for HttpSpeechSource {
    fn fetch_manifest(&self) -> SourceFuture<Vec<ManifestEntry>> {
        Box::pin(get_json(self.client.clone(), self.manifest_url()))
    }

    fn fetch_speech(&self, year: Year) -> SourceFuture<Speech> {
        Box::pin(get_json(self.client.clone(), self.speech_url(year)))
    }
}

/// Fetches `url` without caching and decodes its JSON body.
async fn get_json<T: DeserializeOwned>(client: Client, url: Url) -> std::result::Result<T, FetchError> {
    tracing::debug!(%url, "requesting archive document");

    let response = client
        .get(url.clone())
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(%url, error = %e, "archive document is not valid JSON");
        FetchError::Decode(e.to_string())
    })
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
