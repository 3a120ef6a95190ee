// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image fetching.

use super::ImageSource;
use crate::app::config::{IMAGE_FETCH_TIMEOUT_SECS, MAX_IMAGE_BYTES};
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::io::Cursor;
use std::time::Duration;

/// Fetches images from disk or over HTTP.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::Client,
}

impl Loader {
    /// Creates a loader with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(IMAGE_FETCH_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Loads `source` and wraps it in an image handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be read, exceed
    /// [`MAX_IMAGE_BYTES`], or are not a supported image format.
    pub async fn load(&self, source: ImageSource) -> Result<Handle> {
        let bytes = match source {
            ImageSource::Remote(url) => self.fetch_remote(&url).await?,
            ImageSource::Local(path) => {
                let metadata = tokio::fs::metadata(&path).await?;
                ensure_size(metadata.len())?;
                tokio::fs::read(&path).await?
            }
        };
        validate(&bytes)?;
        Ok(Handle::from_bytes(bytes))
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        if let Some(length) = response.content_length() {
            ensure_size(length)?;
        }
        let bytes = response.bytes().await?;
        ensure_size(bytes.len() as u64)?;
        Ok(bytes.to_vec())
    }
}

fn ensure_size(len: u64) -> Result<()> {
    if len > MAX_IMAGE_BYTES {
        return Err(Error::Image(format!(
            "{} bytes exceeds the {} byte limit",
            len, MAX_IMAGE_BYTES
        )));
    }
    Ok(())
}

/// Reads the image header and returns the picture's dimensions.
///
/// Only the header is parsed; pixel data is decoded later by the renderer.
fn validate(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = image_rs::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| Error::Image("unrecognized image format".to_string()))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|err| Error::Image(err.to_string()))?;
    log::trace!("Read {:?} header, {}x{}", format, width, height);
    Ok((width, height))
}
