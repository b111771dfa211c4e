// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Source**: where the speech archive is hosted
//! - **Share**: the public page whose links are shared
//! - **Window**: initial window geometry and the responsive breakpoint
//! - **Notifications**: toast display limits

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Base URL of the speech archive; documents live below `assets/`.
pub const DEFAULT_ASSETS_URL: &str = "https://nytaarstale.dk/";

// ==========================================================================
// Share Defaults
// ==========================================================================

/// Public page used as location when none is given on the command line.
pub const DEFAULT_PAGE_URL: &str = "https://nytaarstale.dk/";

/// Author link shown in the footer.
pub const AUTHOR_URL: &str = "https://juul.xyz";

/// Author name shown in the footer.
pub const AUTHOR_NAME: &str = "Martin Christiansen";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Width from which the year form moves into the header.
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 640.0;

/// Maximum width of the reading column.
pub const CONTENT_MAX_WIDTH: f32 = 768.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);

    // The default window must open in the wide layout.
    assert!(WIDE_LAYOUT_MIN_WIDTH > MIN_WINDOW_WIDTH);
    assert!(WIDE_LAYOUT_MIN_WIDTH <= DEFAULT_WINDOW_WIDTH);

    assert!(CONTENT_MAX_WIDTH <= DEFAULT_WINDOW_WIDTH);

    assert!(MAX_VISIBLE_TOASTS > 0);

    // Archive and page URLs must be directories so relative joins stay below them.
    let assets = DEFAULT_ASSETS_URL.as_bytes();
    assert!(assets[assets.len() - 1] == b'/');
    let page = DEFAULT_PAGE_URL.as_bytes();
    assert!(page[page.len() - 1] == b'/');
};
