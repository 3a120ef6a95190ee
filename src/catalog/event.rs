// SPDX-License-Identifier: MPL-2.0
//! Committee event records and their image gallery.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of description characters shown on a hovered event card.
pub const EXCERPT_CHARS: usize = 120;

/// Lifecycle status of an event.
///
/// Catalogs may contain statuses this version does not know about. They are
/// kept as [`EventStatus::Other`] instead of failing the load, so the event
/// still shows up under the "all" filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Completed,
    Upcoming,
    Other(String),
}

impl EventStatus {
    /// Returns the raw catalog value for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
            Self::Other(raw) => raw,
        }
    }

    /// Returns the i18n key of the badge label for this status.
    ///
    /// Anything that is not completed is labelled as upcoming, matching the
    /// two badge variants the cards know how to draw.
    #[must_use]
    pub fn badge_key(&self) -> &'static str {
        match self {
            Self::Completed => "event-status-completed",
            Self::Upcoming | Self::Other(_) => "event-status-upcoming",
        }
    }
}

impl From<String> for EventStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "completed" => Self::Completed,
            "upcoming" => Self::Upcoming,
            _ => Self::Other(raw),
        }
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Ordered, non-empty list of image URIs attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery(Vec<String>);

impl Gallery {
    /// Builds a gallery, returning `None` when `images` is empty.
    #[must_use]
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            None
        } else {
            Some(Self(images))
        }
    }

    /// Number of images, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of images as a non-zero count.
    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.0.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the image URI at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterates over the image URIs in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A committee event as shown on the events grid and in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    /// ISO date (`YYYY-MM-DD`) as written in the catalog.
    pub date: String,
    pub image: String,
    pub status: EventStatus,
    pub description: String,
    pub gallery: Gallery,
}

impl Event {
    /// Parses [`Event::date`], returning `None` for malformed values.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// First [`EXCERPT_CHARS`] characters of the description, with an
    /// ellipsis when the text was cut.
    #[must_use]
    pub fn excerpt(&self) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }
}
