// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for problems that do not block the gallery: a catalog or config
//! file that could not be used, or a link the desktop refused to open.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` queue with visibility limit and auto-dismiss
//! - [`toast`] - rendering, stacked in the bottom-right corner
//!
//! Success and info toasts disappear after a few seconds, warnings stay a
//! little longer, errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
