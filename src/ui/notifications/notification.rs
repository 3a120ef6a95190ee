// SPDX-License-Identifier: MPL-2.0
//! Notification data and severity levels.

use crate::app::config::TOAST_WARNING_SECS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Warning,
    /// Stays on screen until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph drawn at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }

    /// How long a toast of this severity stays visible, `None` for errors.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(Duration::from_secs(TOAST_WARNING_SECS)),
            Severity::Error => None,
        }
    }
}

/// A message shown to the user, resolved through i18n at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    /// Set when the toast reaches the screen; queued toasts do not age.
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: None,
        }
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether `other` would render the same text.
    #[must_use]
    pub fn same_message(&self, other: &Notification) -> bool {
        self.severity == other.severity
            && self.message_key == other.message_key
            && self.message_args == other.message_args
    }

    /// Starts the auto-dismiss clock.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Whether the toast has been on screen longer than its severity's
    /// lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.severity.lifetime(), self.shown_at) {
            (Some(lifetime), Some(shown_at)) => {
                now.saturating_duration_since(shown_at) >= lifetime
            }
            _ => false,
        }
    }
}
