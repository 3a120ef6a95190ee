// SPDX-License-Identifier: MPL-2.0
//! Circular slide index over an event gallery.
//!
//! A carousel is created for a gallery of known length and starts on the
//! first slide. Moving past either end wraps around. Jumps go through
//! [`Slide`] values handed out by the carousel itself, so callers cannot
//! name a slide that does not exist.

use std::num::NonZeroUsize;

/// A slide position obtained from a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slide(usize);

impl Slide {
    /// Zero-based position of the slide.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based position, as shown to users.
    #[must_use]
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

/// Current slide of a non-empty gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    /// Creates a carousel on the first of `len` slides.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// The current slide.
    #[must_use]
    pub fn current(&self) -> Slide {
        Slide(self.index)
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    /// Returns the slide at `index` if it exists in this carousel.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<Slide> {
        (index < self.len.get()).then_some(Slide(index))
    }

    /// Every slide of this carousel, in order.
    pub fn slides(&self) -> impl Iterator<Item = Slide> {
        (0..self.len.get()).map(Slide)
    }

    /// Moves to `slide`.
    ///
    /// A slide taken from a longer carousel is rejected and the index is
    /// left untouched. Returns whether the jump happened.
    pub fn jump_to(&mut self, slide: Slide) -> bool {
        if slide.0 < self.len.get() {
            self.index = slide.0;
            true
        } else {
            log::warn!(
                "Ignoring jump to slide {} of a {}-image gallery",
                slide.number(),
                self.len
            );
            false
        }
    }

    /// "n / m" counter text.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current().number(), self.len)
    }

    /// Arrows and dots are only meaningful with more than one slide.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.len.get() > 1
    }
}
