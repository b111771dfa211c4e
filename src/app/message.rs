// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::FetchError;
use crate::application::session::LoadTicket;
use crate::domain::{ManifestEntry, Speech};
use crate::ui::{footer, notifications, quick_years, share_buttons, year_form};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    YearForm(year_form::Message),
    QuickYears(quick_years::Message),
    Share(share_buttons::Message),
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    ManifestLoaded(Result<Vec<ManifestEntry>, FetchError>),
    SpeechLoaded {
        ticket: LoadTicket,
        result: Result<Speech, FetchError>,
    },
    WindowResized(iced::Size),
    /// Periodic tick for the skeleton pulse and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `da`, `en-US`).
    pub lang: Option<String>,
    /// Optional base URL of the speech archive.
    /// Takes precedence over `[source] assets_url` in the config file.
    pub assets_url: Option<String>,
    /// Optional location URL to open, e.g. `https://nytaarstale.dk/?year=2022`.
    /// Takes precedence over `[share] page_url` in the config file.
    pub location: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NYTAARSTALE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
