// SPDX-License-Identifier: MPL-2.0
//! In-memory image cache keyed by catalog URI.
//!
//! Entries track the whole lifecycle of an image so the view can draw a
//! spinner, the picture, or a placeholder. Failed images keep their entry
//! and are not requested again for the rest of the session.

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Load state of one image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}

/// LRU cache of decoded image handles.
pub struct ImageCache {
    entries: LruCache<String, ImageState>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `uri` as loading if it is not known yet.
    ///
    /// Returns `true` when the caller should start a fetch.
    pub fn request(&mut self, uri: &str) -> bool {
        if self.entries.contains(uri) {
            self.entries.promote(uri);
            return false;
        }
        self.entries.put(uri.to_string(), ImageState::Loading);
        true
    }

    /// Grows the cache so `count` images fit at once.
    ///
    /// Never shrinks: entries that are on screen must not evict each other.
    pub fn reserve(&mut self, count: usize) {
        if let Some(capacity) = NonZeroUsize::new(count) {
            if capacity > self.entries.cap() {
                log::debug!("Growing image cache to {}", capacity);
                self.entries.resize(capacity);
            }
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Stores the outcome of a fetch.
    pub fn complete(&mut self, uri: String, handle: Option<Handle>) {
        let state = match handle {
            Some(handle) => ImageState::Ready(handle),
            None => ImageState::Failed,
        };
        self.entries.put(uri, state);
    }

    /// Looks up `uri` without changing its recency.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&ImageState> {
        self.entries.peek(uri)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
