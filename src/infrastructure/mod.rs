// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`launcher`]: Opens links with the desktop's default handler (implements [`LinkOpener`])
//!
//! [`LinkOpener`]: crate::application::port::LinkOpener

pub mod launcher;

pub use launcher::SystemLauncher;
