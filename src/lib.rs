// SPDX-License-Identifier: MPL-2.0
//! `committee_gallery` shows a committee's events, videos and magazine
//! issues in a tabbed desktop gallery built with the Iced GUI framework.
//!
//! Gallery state lives in [`gallery`] and is driven purely by messages;
//! [`app`] wires it to the catalog, configuration, localization, image
//! loading and the desktop link opener.

pub mod app;
pub mod application;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
