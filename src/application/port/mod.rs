// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`speech_source`]: read access to the speech archive
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Futures are boxed and `'static` so callers can hand them to
//!   `Task::perform` without borrowing the source

pub mod speech_source;

pub use speech_source::{FetchError, SourceFuture, SpeechSource};
