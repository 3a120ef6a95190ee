// SPDX-License-Identifier: MPL-2.0
//! Event detail overlay sub-component.
//!
//! The overlay is either closed or showing one event together with a
//! carousel over that event's gallery. Opening always starts on the first
//! image, even when the same event was shown before.

use super::carousel::{Carousel, Slide};
use crate::catalog::Event;

/// Overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Closed,
    Open { event: Box<Event>, carousel: Carousel },
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show `event`, replacing whatever was open.
    Open(Box<Event>),
    /// Dismiss the overlay.
    Close,
    Next,
    Previous,
    JumpTo(Slide),
}

/// Effects produced by overlay transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened { event_id: u32 },
    Closed,
    SlideChanged { index: usize },
}

impl State {
    /// Handle an overlay message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(event) => {
                let event_id = event.id;
                let carousel = Carousel::new(event.gallery.count());
                *self = State::Open { event, carousel };
                Effect::Opened { event_id }
            }
            Message::Close => {
                if self.is_open() {
                    *self = State::Closed;
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::Next => self.move_carousel(Carousel::next),
            Message::Previous => self.move_carousel(Carousel::previous),
            Message::JumpTo(slide) => match self {
                State::Open { carousel, .. } => {
                    if carousel.jump_to(slide) {
                        Effect::SlideChanged {
                            index: carousel.index(),
                        }
                    } else {
                        Effect::None
                    }
                }
                State::Closed => Effect::None,
            },
        }
    }

    fn move_carousel(&mut self, step: fn(&mut Carousel)) -> Effect {
        match self {
            State::Open { carousel, .. } => {
                let before = carousel.index();
                step(carousel);
                if carousel.index() == before {
                    Effect::None
                } else {
                    Effect::SlideChanged {
                        index: carousel.index(),
                    }
                }
            }
            State::Closed => Effect::None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, State::Open { .. })
    }

    /// The event being shown, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Event> {
        match self {
            State::Open { event, .. } => Some(event),
            State::Closed => None,
        }
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        match self {
            State::Open { carousel, .. } => Some(carousel),
            State::Closed => None,
        }
    }

    /// URI of the image the carousel is on.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        match self {
            State::Open { event, carousel } => event.gallery.get(carousel.index()),
            State::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EventStatus, Gallery};

    fn event(id: u32, images: &[&str]) -> Box<Event> {
        Box::new(Event {
            id,
            title: format!("Event {id}"),
            date: "2024-01-01".into(),
            image: "cover.jpg".into(),
            status: EventStatus::Completed,
            description: String::new(),
            gallery: Gallery::new(images.iter().map(|s| (*s).to_string()).collect())
                .expect("non-empty"),
        })
    }

    #[test]
    fn starts_closed() {
        let state = State::default();
        assert!(!state.is_open());
        assert!(state.selected().is_none());
        assert!(state.current_image().is_none());
    }

    #[test]
    fn open_starts_on_first_image() {
        let mut state = State::default();
        let effect = state.handle(Message::Open(event(1, &["a", "b", "c"])));
        assert_eq!(effect, Effect::Opened { event_id: 1 });
        assert_eq!(state.carousel().map(Carousel::index), Some(0));
        assert_eq!(state.current_image(), Some("a"));
    }

    #[test]
    fn reopening_resets_the_carousel() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["a", "b", "c"])));
        state.handle(Message::Next);
        state.handle(Message::Next);
        state.handle(Message::Close);

        state.handle(Message::Open(event(1, &["a", "b", "c"])));
        assert_eq!(state.current_image(), Some("a"));
    }

    #[test]
    fn switching_events_while_open_resets_index() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["a", "b"])));
        state.handle(Message::Next);
        state.handle(Message::Open(event(2, &["x", "y", "z"])));
        assert_eq!(state.selected().map(|e| e.id), Some(2));
        assert_eq!(state.carousel().map(Carousel::index), Some(0));
        assert_eq!(state.carousel().map(Carousel::len), Some(3));
    }

    #[test]
    fn carousel_scenario_through_overlay() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["a", "b", "c"])));

        assert_eq!(state.handle(Message::Next), Effect::SlideChanged { index: 1 });
        assert_eq!(state.current_image(), Some("b"));
        state.handle(Message::Next);
        assert_eq!(state.current_image(), Some("c"));
        state.handle(Message::Next);
        assert_eq!(state.current_image(), Some("a"));
        state.handle(Message::Previous);
        assert_eq!(state.current_image(), Some("c"));
    }

    #[test]
    fn close_clears_selection() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["a"])));
        assert_eq!(state.handle(Message::Close), Effect::Closed);
        assert!(state.selected().is_none());
    }

    #[test]
    fn close_when_closed_is_noop() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Close), Effect::None);
    }

    #[test]
    fn navigation_ignored_while_closed() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.handle(Message::Previous), Effect::None);
        assert_eq!(state, State::Closed);
    }

    #[test]
    fn single_image_navigation_has_no_effect() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["only"])));
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.current_image(), Some("only"));
    }

    #[test]
    fn jump_to_slide_from_dots() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["a", "b", "c"])));
        let slide = state.carousel().and_then(|c| c.slide(2)).expect("slide");
        assert_eq!(
            state.handle(Message::JumpTo(slide)),
            Effect::SlideChanged { index: 2 }
        );
        assert_eq!(state.current_image(), Some("c"));
    }

    #[test]
    fn stale_slide_from_previous_event_is_rejected() {
        let mut state = State::default();
        state.handle(Message::Open(event(1, &["a", "b", "c"])));
        let stale = state.carousel().and_then(|c| c.slide(2)).expect("slide");

        state.handle(Message::Open(event(2, &["x"])));
        assert_eq!(state.handle(Message::JumpTo(stale)), Effect::None);
        assert_eq!(state.current_image(), Some("x"));
    }
}
