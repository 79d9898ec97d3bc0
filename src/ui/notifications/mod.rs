// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`] - `Notification` with severity and i18n message key
//! - [`manager`] - `Manager` for queueing and expiry
//! - [`toast`] - Rendering of the visible toasts
//!
//! Success/info toasts last ~3s, warnings ~5s, errors until dismissed. At most
//! three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
