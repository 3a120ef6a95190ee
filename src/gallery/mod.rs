// SPDX-License-Identifier: MPL-2.0
//! Gallery state: tab selection, event filter, hovered card and the detail
//! overlay.
//!
//! ## Architecture
//!
//! ```text
//! State (orchestrator)
//!     ├── active_tab    - Events / Videos / Magazine
//!     ├── event_filter  - All / Past / Upcoming
//!     ├── hovered       - card under the pointer
//!     └── overlay       - Closed / Open { event, carousel }
//! ```
//!
//! All transitions are synchronous. Outward actions come back as an
//! [`Effect`]: opening an external link, remembering the filter, or fetching
//! the images that just came on screen.

pub mod carousel;
pub mod overlay;

pub use carousel::{Carousel, Slide};

use crate::catalog::{Catalog, Event, EventFilter};
use serde::{Deserialize, Serialize};

/// Top-level gallery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Events,
    Videos,
    Magazine,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 3] = [Self::Events, Self::Videos, Self::Magazine];

    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Events => "tab-events",
            Self::Videos => "tab-videos",
            Self::Magazine => "tab-magazine",
        }
    }

    #[must_use]
    pub fn empty_key(&self) -> &'static str {
        match self {
            Self::Events => "gallery-empty-events",
            Self::Videos => "gallery-empty-videos",
            Self::Magazine => "gallery-empty-magazine",
        }
    }
}

/// Identifies a card on any of the three grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Event(u32),
    Video(u32),
    Magazine(u32),
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    SelectFilter(EventFilter),
    OpenEvent(u32),
    CloseOverlay,
    NextImage,
    PreviousImage,
    JumpTo(Slide),
    OpenVideo(u32),
    OpenMagazine(u32),
    HoverCard(Card),
    UnhoverCard(Card),
}

/// Effects the application shell has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open this URL with the platform's default handler.
    OpenLink(String),
    /// The filter changed and may need to be remembered. The events grid
    /// shows different covers.
    FilterChanged(EventFilter),
    /// Different images are on screen: another tab or a newly opened event.
    ImagesChanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    active_tab: Tab,
    event_filter: EventFilter,
    hovered: Option<Card>,
    overlay: overlay::State,
}

impl State {
    #[must_use]
    pub fn new(active_tab: Tab, event_filter: EventFilter) -> Self {
        Self {
            active_tab,
            event_filter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn event_filter(&self) -> EventFilter {
        self.event_filter
    }

    #[must_use]
    pub fn hovered(&self) -> Option<Card> {
        self.hovered
    }

    #[must_use]
    pub fn overlay(&self) -> &overlay::State {
        &self.overlay
    }

    /// The event shown in the overlay, if open.
    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        self.overlay.selected()
    }

    /// Events visible on the events grid, in catalog order.
    #[must_use]
    pub fn visible_events<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Event> {
        self.event_filter.apply(&catalog.events)
    }

    /// Handle a gallery message against `catalog`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, catalog: &Catalog) -> Effect {
        match msg {
            Message::SelectTab(tab) => {
                if self.active_tab != tab {
                    log::debug!("Switching to {:?} tab", tab);
                    self.active_tab = tab;
                    self.hovered = None;
                    return Effect::ImagesChanged;
                }
                Effect::None
            }
            Message::SelectFilter(filter) => {
                if self.event_filter == filter {
                    return Effect::None;
                }
                log::debug!("Event filter set to {:?}", filter);
                self.event_filter = filter;
                Effect::FilterChanged(filter)
            }
            Message::OpenEvent(id) => match catalog.event(id) {
                Some(event) => {
                    self.overlay_effect(overlay::Message::Open(Box::new(event.clone())))
                }
                None => {
                    log::warn!("Cannot open unknown event {}", id);
                    Effect::None
                }
            },
            Message::CloseOverlay => self.overlay_effect(overlay::Message::Close),
            Message::NextImage => self.overlay_effect(overlay::Message::Next),
            Message::PreviousImage => self.overlay_effect(overlay::Message::Previous),
            Message::JumpTo(slide) => self.overlay_effect(overlay::Message::JumpTo(slide)),
            Message::OpenVideo(id) => match catalog.video(id) {
                Some(video) => Effect::OpenLink(video.url.clone()),
                None => {
                    log::warn!("Cannot open unknown video {}", id);
                    Effect::None
                }
            },
            Message::OpenMagazine(id) => match catalog.magazine(id) {
                Some(magazine) => Effect::OpenLink(magazine.url.clone()),
                None => {
                    log::warn!("Cannot open unknown magazine {}", id);
                    Effect::None
                }
            },
            Message::HoverCard(card) => {
                self.hovered = Some(card);
                Effect::None
            }
            Message::UnhoverCard(card) => {
                if self.hovered == Some(card) {
                    self.hovered = None;
                }
                Effect::None
            }
        }
    }

    fn overlay_effect(&mut self, msg: overlay::Message) -> Effect {
        match self.overlay.handle(msg) {
            overlay::Effect::Opened { event_id } => {
                log::debug!("Showing event {}", event_id);
                Effect::ImagesChanged
            }
            overlay::Effect::Closed => {
                log::debug!("Event overlay closed");
                Effect::None
            }
            overlay::Effect::SlideChanged { index } => {
                log::debug!("Carousel moved to slide {}", index);
                Effect::None
            }
            overlay::Effect::None => Effect::None,
        }
    }

    /// Describes what is currently visible.
    #[must_use]
    pub fn snapshot(&self, catalog: &Catalog) -> Snapshot {
        let items = match self.active_tab {
            Tab::Events => self
                .visible_events(catalog)
                .iter()
                .map(|event| event.id)
                .collect(),
            Tab::Videos => catalog.videos.iter().map(|video| video.id).collect(),
            Tab::Magazine => catalog.magazines.iter().map(|magazine| magazine.id).collect(),
        };

        let overlay = match &self.overlay {
            overlay::State::Open { event, carousel } => Some(OverlaySnapshot {
                event_id: event.id,
                index: carousel.index(),
                len: carousel.len(),
                navigation: carousel.has_navigation(),
            }),
            overlay::State::Closed => None,
        };

        Snapshot {
            tab: self.active_tab,
            filter: self.event_filter,
            items,
            overlay,
        }
    }
}

/// What the gallery shows at a given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tab: Tab,
    pub filter: EventFilter,
    /// Ids of the cards on the active grid, in display order.
    pub items: Vec<u32>,
    pub overlay: Option<OverlaySnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySnapshot {
    pub event_id: u32,
    pub index: usize,
    pub len: usize,
    /// Whether arrows and dots are shown.
    pub navigation: bool,
}
