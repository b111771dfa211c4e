// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core types and rules of the speech archive.
//!
//! This module contains value objects and business rules only. It depends on
//! nothing but `std` and `serde` (for the wire shape of the documents), so the
//! rules can be tested without a runtime or a window.
//!
//! # Modules
//!
//! - [`year`]: the [`Year`](year::Year) value object and its bounds
//! - [`speech`]: the [`Speech`](speech::Speech) document
//! - [`manifest`]: normalization of the available-years manifest
//! - [`speech_state`]: the [`SpeechState`](speech_state::SpeechState) of the
//!   speech fetch

pub mod manifest;
pub mod speech;
pub mod speech_state;
pub mod year;

pub use manifest::{normalize_years, ManifestEntry};
pub use speech::Speech;
pub use speech_state::{LoadFailure, SpeechState};
pub use year::Year;
