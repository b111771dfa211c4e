// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts confirm actions that have no other visible effect, such as copying
//! a share link, and report recoverable problems like an unreadable settings
//! file.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity levels and i18n key
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-link-copied"));
//!
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! At most three toasts are visible; success and info toasts expire after a
//! few seconds, warnings a little later, errors only on dismiss.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
