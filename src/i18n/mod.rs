// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. Danish is the
//! default language; the locale is resolved from the CLI, then the config
//! file, then the OS.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
