// SPDX-License-Identifier: MPL-2.0
//! Gallery content: events, videos and magazine issues.
//!
//! The catalog is read once at startup and never mutated afterwards. It is a
//! TOML document with three arrays of tables:
//!
//! ```toml
//! [[events]]
//! id = 1
//! title = "AI & Future Tech Summit"
//! date = "2024-03-15"
//! image = "images/summit.jpg"
//! status = "completed"
//! description = "..."
//! gallery = ["images/summit.jpg", "images/stage.jpg"]
//!
//! [[videos]]
//! id = 1
//! title = "AI Revolution: What's Next?"
//! thumbnail = "images/talk.jpg"
//! url = "https://youtube.com/watch?v=example1"
//!
//! [[magazines]]
//! id = 1
//! title = "Tech Futures Quarterly"
//! image = "images/cover.jpg"
//! url = "https://example.com/magazine"
//! ```
//!
//! Validation happens here, not in the UI: an event with an empty gallery
//! or a duplicated id rejects the whole document.

pub mod event;
pub mod filter;
pub mod item;

pub use event::{Event, EventStatus, Gallery};
pub use filter::EventFilter;
pub use item::{Magazine, Video};

use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE_CATALOG: &str = include_str!("../../assets/catalog/sample.toml");

/// The three ordered collections shown by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub events: Vec<Event>,
    pub videos: Vec<Video>,
    pub magazines: Vec<Magazine>,
    /// Directory used to resolve relative image paths.
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    events: Vec<RawEvent>,
    #[serde(default)]
    videos: Vec<Video>,
    #[serde(default)]
    magazines: Vec<Magazine>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: u32,
    title: String,
    date: String,
    image: String,
    status: EventStatus,
    #[serde(default)]
    description: String,
    gallery: Vec<String>,
}

impl RawEvent {
    fn validate(self) -> std::result::Result<Event, CatalogError> {
        let gallery = Gallery::new(self.gallery)
            .ok_or(CatalogError::EmptyGallery { event_id: self.id })?;
        Ok(Event {
            id: self.id,
            title: self.title,
            date: self.date,
            image: self.image,
            status: self.status,
            description: self.description,
            gallery,
        })
    }
}

fn ensure_unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = u32>,
) -> std::result::Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

impl Catalog {
    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the TOML is malformed, an event has an
    /// empty gallery, or ids repeat within a collection.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, CatalogError> {
        let raw: RawCatalog =
            toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;

        ensure_unique_ids("events", raw.events.iter().map(|e| e.id))?;
        ensure_unique_ids("videos", raw.videos.iter().map(|v| v.id))?;
        ensure_unique_ids("magazines", raw.magazines.iter().map(|m| m.id))?;

        let events = raw
            .events
            .into_iter()
            .map(RawEvent::validate)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            events,
            videos: raw.videos,
            magazines: raw.magazines,
            base_dir: None,
        })
    }

    /// Reads a catalog file; relative image paths resolve against its directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a catalog error if
    /// its content is invalid.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut catalog = Self::from_toml_str(&content)?;
        catalog.base_dir = path.parent().map(Path::to_path_buf);
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_toml_str(SAMPLE_CATALOG).expect("built-in catalog is valid")
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Looks up a video by id.
    #[must_use]
    pub fn video(&self, id: u32) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// Looks up a magazine issue by id.
    #[must_use]
    pub fn magazine(&self, id: u32) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id == id)
    }
}

/// Loads the catalog at `path`, or the built-in one when `path` is `None`.
///
/// Returns a tuple of (catalog, optional_warning). When the file cannot be
/// used, the built-in catalog is returned together with the i18n key of a
/// warning explaining why.
pub fn load(path: Option<&Path>) -> (Catalog, Option<String>) {
    let Some(path) = path else {
        return (Catalog::sample(), None);
    };

    match Catalog::load_from_path(path) {
        Ok(catalog) => {
            log::info!(
                "Loaded catalog {} ({} events, {} videos, {} magazines)",
                path.display(),
                catalog.events.len(),
                catalog.videos.len(),
                catalog.magazines.len()
            );
            (catalog, None)
        }
        Err(err) => {
            log::warn!("Falling back to built-in catalog: {}", err);
            let key = match &err {
                crate::error::Error::Catalog(catalog_err) => catalog_err.i18n_key(),
                _ => "notification-catalog-read-error",
            };
            (Catalog::sample(), Some(key.to_string()))
        }
    }
}
