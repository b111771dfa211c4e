// SPDX-License-Identifier: MPL-2.0
//! Social sharing of the selected speech.
//!
//! [`ShareLinks`] derives the shareable URL and text for a year and builds the
//! platform intent links. Instagram has no public share intent, so
//! [`share_on_instagram`] walks a fallback chain over a [`ShareBackend`]:
//! native share sheet, then clipboard, then the system browser.

use crate::application::location::Location;
use crate::domain::{Speech, Year};
use std::fmt;

/// Title used for native share sheets.
pub const SHARE_TITLE: &str = "Nytårstalen";

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const X_INTENT: &str = "https://x.com/intent/tweet";
const BLUESKY_INTENT: &str = "https://bsky.app/intent/compose";

/// Share targets offered below the speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    X,
    Bluesky,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::X,
        Platform::Bluesky,
        Platform::Instagram,
    ];

    /// Button caption. Brand names are not translated.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::X => "X (Twitter)",
            Platform::Bluesky => "Bluesky",
            Platform::Instagram => "Instagram",
        }
    }

    /// i18n key of the "share on ..." tooltip.
    #[must_use]
    pub fn tooltip_key(self) -> &'static str {
        match self {
            Platform::Facebook => "share-on-facebook",
            Platform::X => "share-on-x",
            Platform::Bluesky => "share-on-bluesky",
            Platform::Instagram => "share-on-instagram",
        }
    }
}

/// Shareable URL and text for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    url: String,
    text: String,
}

impl ShareLinks {
    /// Builds the links for `year`.
    ///
    /// Title and monarch are taken from `speech` when it is the speech of
    /// `year`; blank fields are treated as unknown.
    #[must_use]
    pub fn new(location: &Location, year: Year, speech: Option<&Speech>) -> Self {
        let speech = speech.filter(|s| s.year == year.value());
        let title = speech.and_then(Speech::title);
        let monarch = speech.and_then(Speech::monarch);

        Self {
            url: location.link_for(year),
            text: share_text(year, title, monarch),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn facebook(&self) -> String {
        format!("{FACEBOOK_SHARER}?u={}", urlencoding::encode(&self.url))
    }

    #[must_use]
    pub fn x(&self) -> String {
        format!(
            "{X_INTENT}?text={}&url={}",
            urlencoding::encode(&self.text),
            urlencoding::encode(&self.url)
        )
    }

    #[must_use]
    pub fn bluesky(&self) -> String {
        let body = format!("{} {}", self.text, self.url);
        format!("{BLUESKY_INTENT}?text={}", urlencoding::encode(&body))
    }

    /// Intent link for `platform`, or `None` for Instagram which has none.
    #[must_use]
    pub fn intent(&self, platform: Platform) -> Option<String> {
        match platform {
            Platform::Facebook => Some(self.facebook()),
            Platform::X => Some(self.x()),
            Platform::Bluesky => Some(self.bluesky()),
            Platform::Instagram => None,
        }
    }
}

fn share_text(year: Year, title: Option<&str>, monarch: Option<&str>) -> String {
    let base = match title {
        Some(title) => format!("{title} – Nytårstalen {year}"),
        None => format!("Nytårstalen {year}"),
    };
    match monarch {
        Some(monarch) => format!("{base} – {monarch}"),
        None => base,
    }
}

// =============================================================================
// Backend
// =============================================================================

/// Failure of a single share mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The platform offers no such mechanism.
    Unsupported,
    /// The mechanism exists but failed.
    Failed(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Unsupported => write!(f, "Not supported on this platform"),
            ShareError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ShareError {}

/// Operating-system facilities used for sharing.
pub trait ShareBackend: Send + Sync + fmt::Debug {
    /// Hands the link to the platform's native share sheet.
    fn native_share(&self, title: &str, text: &str, url: &str) -> Result<(), ShareError>;

    /// Places `text` on the clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;

    /// Opens `url` in the default browser.
    fn open_in_browser(&self, url: &str) -> Result<(), ShareError>;
}

/// How an Instagram share ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstagramOutcome {
    SharedNatively,
    /// The link was copied; the user should be told to paste it.
    CopiedLink,
    OpenedInBrowser,
    /// Every mechanism failed.
    Failed,
}

/// Shares the link for Instagram through the first mechanism that works.
pub fn share_on_instagram(backend: &dyn ShareBackend, links: &ShareLinks) -> InstagramOutcome {
    match backend.native_share(SHARE_TITLE, links.text(), links.url()) {
        Ok(()) => return InstagramOutcome::SharedNatively,
        Err(ShareError::Unsupported) => {}
        Err(err) => tracing::debug!(error = %err, "native share failed"),
    }

    match backend.copy_to_clipboard(links.url()) {
        Ok(()) => return InstagramOutcome::CopiedLink,
        Err(err) => tracing::warn!(error = %err, "could not copy link to clipboard"),
    }

    match backend.open_in_browser(links.url()) {
        Ok(()) => InstagramOutcome::OpenedInBrowser,
        Err(err) => {
            tracing::warn!(error = %err, url = links.url(), "could not open link");
            InstagramOutcome::Failed
        }
    }
}
