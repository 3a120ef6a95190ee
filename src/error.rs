// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Image(String),
    Launch(String),
}

/// Reasons a catalog document is rejected at load time.
///
/// Each variant maps to a localized message so the app can explain in a
/// toast why it fell back to the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The document is not valid TOML or does not match the catalog shape.
    Parse(String),

    /// An event declares an empty `gallery` list.
    EmptyGallery { event_id: u32 },

    /// Two records of the same collection share an id.
    DuplicateId { collection: &'static str, id: u32 },
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Parse(_) => "notification-catalog-parse-error",
            CatalogError::EmptyGallery { .. } => "notification-catalog-empty-gallery",
            CatalogError::DuplicateId { .. } => "notification-catalog-duplicate-id",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Invalid catalog: {}", msg),
            CatalogError::EmptyGallery { event_id } => {
                write!(f, "Event {} has an empty gallery", event_id)
            }
            CatalogError::DuplicateId { collection, id } => {
                write!(f, "Duplicate id {} in {}", id, collection)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Launch(e) => write!(f, "Launch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
