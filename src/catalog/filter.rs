// SPDX-License-Identifier: MPL-2.0
//! Event filtering for the events grid.
//!
//! The filter is a pure selection: it never reorders events and never
//! changes them, it only decides which ones stay visible.
//!
//! # Example
//!
//! ```
//! use committee_gallery::catalog::filter::EventFilter;
//! use committee_gallery::catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! let past = EventFilter::Past.apply(&catalog.events);
//! assert!(past.len() <= catalog.events.len());
//! ```

use super::event::{Event, EventStatus};
use serde::{Deserialize, Serialize};

/// Which events the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EventFilter {
    /// Every event, whatever its status.
    #[default]
    All,
    /// Events whose status is `completed`.
    Past,
    /// Events whose status is `upcoming`.
    Upcoming,
}

impl EventFilter {
    /// Filters in the order the selector displays them.
    pub const ALL: [EventFilter; 3] = [Self::All, Self::Past, Self::Upcoming];

    /// Returns `true` if `event` passes this filter.
    ///
    /// Events with an unrecognized status only pass [`EventFilter::All`].
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Past => event.status == EventStatus::Completed,
            Self::Upcoming => event.status == EventStatus::Upcoming,
        }
    }

    /// Returns the events passing this filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }

    /// Returns the i18n key of the selector label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::All => "filter-all",
            Self::Past => "filter-past",
            Self::Upcoming => "filter-upcoming",
        }
    }

    /// Parses a persisted filter value, falling back to [`EventFilter::All`]
    /// for anything unrecognized.
    #[must_use]
    pub fn from_name_or_all(name: &str) -> Self {
        match name {
            "past" => Self::Past,
            "upcoming" => Self::Upcoming,
            _ => Self::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::event::Gallery;

    fn event(id: u32, status: &str) -> Event {
        Event {
            id,
            title: format!("Event {id}"),
            date: "2024-01-01".into(),
            image: "cover.jpg".into(),
            status: EventStatus::from(status.to_string()),
            description: String::new(),
            gallery: Gallery::new(vec!["a.jpg".into()]).unwrap(),
        }
    }

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    fn scenario() -> Vec<Event> {
        vec![event(1, "completed"), event(2, "upcoming"), event(3, "completed")]
    }

    #[test]
    fn scenario_past_keeps_completed_in_order() {
        let events = scenario();
        assert_eq!(ids(&EventFilter::Past.apply(&events)), vec![1, 3]);
    }

    #[test]
    fn scenario_upcoming_keeps_upcoming() {
        let events = scenario();
        assert_eq!(ids(&EventFilter::Upcoming.apply(&events)), vec![2]);
    }

    #[test]
    fn all_returns_input_unchanged() {
        let events = scenario();
        assert_eq!(ids(&EventFilter::All.apply(&events)), vec![1, 2, 3]);
    }

    #[test]
    fn every_filter_preserves_relative_order() {
        let events = vec![
            event(5, "upcoming"),
            event(2, "completed"),
            event(9, "upcoming"),
            event(1, "completed"),
            event(4, "upcoming"),
        ];
        for filter in EventFilter::ALL {
            let kept = ids(&filter.apply(&events));
            let positions: Vec<usize> = kept
                .iter()
                .map(|id| events.iter().position(|e| e.id == *id).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "{filter:?} reordered events"
            );
        }
    }

    #[test]
    fn past_and_upcoming_are_disjoint() {
        let events = scenario();
        let past = ids(&EventFilter::Past.apply(&events));
        let upcoming = ids(&EventFilter::Upcoming.apply(&events));
        assert!(past.iter().all(|id| !upcoming.contains(id)));
    }

    #[test]
    fn unknown_status_only_passes_all() {
        let events = vec![event(1, "completed"), event(2, "postponed")];
        assert_eq!(ids(&EventFilter::All.apply(&events)), vec![1, 2]);
        assert_eq!(ids(&EventFilter::Past.apply(&events)), vec![1]);
        assert!(EventFilter::Upcoming.apply(&events).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for filter in EventFilter::ALL {
            assert!(filter.apply(&[]).is_empty());
        }
    }

    #[test]
    fn persisted_names_fall_back_to_all() {
        assert_eq!(EventFilter::from_name_or_all("past"), EventFilter::Past);
        assert_eq!(EventFilter::from_name_or_all("upcoming"), EventFilter::Upcoming);
        assert_eq!(EventFilter::from_name_or_all("archived"), EventFilter::All);
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(EventFilter::default(), EventFilter::All);
    }
}
