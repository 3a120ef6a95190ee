// SPDX-License-Identifier: MPL-2.0
//! Card and gallery image loading.
//!
//! Catalog images are either `http(s)` URLs or filesystem paths. Relative
//! paths resolve against the catalog file's directory.
//!
//! ```text
//! uri ──resolve──▶ ImageSource ──Loader::load──▶ bytes ──validate──▶ Handle ──▶ ImageCache
//! ```

pub mod cache;
pub mod loader;

pub use cache::{ImageCache, ImageState};

use std::path::{Path, PathBuf};

/// Where an image's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    /// Classifies `uri`, resolving relative paths against `base_dir`.
    #[must_use]
    pub fn resolve(uri: &str, base_dir: Option<&Path>) -> Self {
        if is_remote(uri) {
            return Self::Remote(uri.to_string());
        }

        let path = Path::new(uri.strip_prefix("file://").unwrap_or(uri));
        match base_dir {
            Some(base) if path.is_relative() => Self::Local(base.join(path)),
            _ => Self::Local(path.to_path_buf()),
        }
    }
}

fn is_remote(uri: &str) -> bool {
    let lower = uri.get(..8).unwrap_or(uri).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
