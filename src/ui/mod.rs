// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `view`, and those with interaction a `Message`, an `Event` for
//! the parent and an `update` translating one into the other.
//!
//! # Components
//!
//! - [`header`] - Brand mark and site title
//! - [`quick_years`] - Quick-select chips for the manifest years
//! - [`year_form`] - Manual year entry
//! - [`speech_card`] - Skeleton, error, article or empty state
//! - [`share_buttons`] - Share intents and the Instagram fallback
//! - [`footer`] - Copyright and author link
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, inputs, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod notifications;
pub mod quick_years;
pub mod share_buttons;
pub mod speech_card;
pub mod styles;
pub mod theming;
pub mod year_form;
