// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they
//! borrow state and return elements producing component messages.
//!
//! - [`gallery`] - Card grids, filter bar and the event modal
//! - [`navbar`] - Page header with tabs and the theme toggle
//! - [`notifications`] - Toast notification system
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
