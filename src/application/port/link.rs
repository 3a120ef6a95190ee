// SPDX-License-Identifier: MPL-2.0
//! External link opening port.
//!
//! Videos and magazine issues live outside the application. Selecting one
//! hands its URL to the desktop's default handler through this trait.

use crate::error::{Error, Result};

/// Schemes the gallery is willing to hand to the desktop.
pub const ALLOWED_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Opens URLs outside the application.
pub trait LinkOpener: Send + Sync {
    /// Opens `url` with the platform's default handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Launch`] if the handler could not be started or
    /// reported a failure.
    fn open(&self, url: &str) -> Result<()>;
}

/// Rejects anything that is not a plain web or mail link.
///
/// # Errors
///
/// Returns [`Error::Launch`] for empty URLs, unsupported schemes, and
/// URLs containing whitespace or control characters.
pub fn validate_url(url: &str) -> Result<()> {
    let lower = url.to_ascii_lowercase();
    if !ALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return Err(Error::Launch(format!("unsupported link: {url}")));
    }
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::Launch(format!("malformed link: {url}")));
    }
    Ok(())
}
