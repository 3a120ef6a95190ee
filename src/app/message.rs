// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// A card or carousel image finished loading.
    ImageLoaded {
        uri: String,
        result: Result<Handle, Error>,
    },
    /// The desktop handler returned for an external link.
    LinkOpened {
        url: String,
        result: Result<(), Error>,
    },
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file; takes precedence over `[gallery] catalog_path`.
    pub catalog_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COMMITTEE_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
