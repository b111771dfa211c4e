// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the seams the reader depends on:
//!
//! - [`http`]: the speech archive over HTTP (implements [`SpeechSource`])
//! - [`share`]: clipboard and system browser access (implements [`ShareBackend`])
//!
//! [`SpeechSource`]: crate::application::port::SpeechSource
//! [`ShareBackend`]: crate::share::ShareBackend

pub mod http;
pub mod share;

pub use http::HttpSpeechSource;
pub use share::SystemShareBackend;
