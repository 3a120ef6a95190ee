// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.

use super::notification::{Notification, NotificationId};
use crate::app::config::MAX_VISIBLE_TOASTS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Visible toasts (newest first) plus a FIFO of toasts waiting for room.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, or queues it when the screen is full.
    ///
    /// A notification identical to one already shown or queued is dropped.
    pub fn push(&mut self, mut notification: Notification) {
        if self
            .visible
            .iter()
            .chain(self.queue.iter())
            .any(|existing| existing.same_message(&notification))
        {
            log::debug!("Dropping duplicate notification {}", notification.message_key());
            return;
        }

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            notification.mark_shown(Instant::now());
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a notification. Returns `true` if it existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.fill_from_queue(Instant::now());
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible toast whose lifetime ended before `now`; queued
    /// toasts that take their place start aging at `now`.
    pub fn expire(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.fill_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether anything is shown or waiting; drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn fill_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            match self.queue.pop_front() {
                Some(mut notification) => {
                    notification.mark_shown(now);
                    self.visible.push_back(notification);
                }
                None => break,
            }
        }
    }
}
