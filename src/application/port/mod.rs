// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`link`]: Opening external links
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so they can move into background tasks
//! - No `async fn` - callers wrap blocking calls in Iced `Task`s

pub mod link;

pub use link::{validate_url, LinkOpener};
