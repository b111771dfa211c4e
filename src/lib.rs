// SPDX-License-Identifier: MPL-2.0
//! `nytaarstale` is a desktop reader for the Danish New Year's speeches,
//! built with the Iced GUI framework.
//!
//! It fetches the speech for a selected year from a static JSON archive,
//! keeps the selection in a shareable location URL, and offers share links
//! for the common social platforms. Localization uses Fluent and user
//! preferences live in a small TOML file.

#![doc(html_root_url = "https://docs.rs/nytaarstale/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod share;
pub mod ui;
