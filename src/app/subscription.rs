// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts drive the event modal; a periodic tick runs only
//! while toasts are on screen.

use super::Message;
use crate::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Routes Escape and the left/right arrows to the gallery.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                shortcut(&key).map(Message::Gallery)
            }
            _ => None,
        }
    })
}

/// Maps a key to the gallery action it triggers.
///
/// Arrow keys are sent unconditionally; the gallery ignores them while the
/// modal is closed.
pub fn shortcut(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::Escape) => Some(gallery::Message::CloseOverlay),
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::PreviousImage),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::NextImage),
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_overlay() {
        assert!(matches!(
            shortcut(&Key::Named(Named::Escape)),
            Some(gallery::Message::CloseOverlay)
        ));
    }

    #[test]
    fn arrows_move_carousel() {
        assert!(matches!(
            shortcut(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::PreviousImage)
        ));
        assert!(matches!(
            shortcut(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::NextImage)
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(shortcut(&Key::Character("a".into())).is_none());
        assert!(shortcut(&Key::Named(Named::Enter)).is_none());
    }
}
