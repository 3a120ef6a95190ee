// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence.
//!
//! Only user preferences touched from the UI are written back: the theme
//! mode, the interface language and, when enabled, the last event filter.

use super::config::{self, Config};
use crate::catalog::EventFilter;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Stores `mode` and writes the config to disk.
pub fn persist_theme_mode(config: &mut Config, mode: ThemeMode) {
    if config.general.theme_mode == mode {
        return;
    }
    config.general.theme_mode = mode;
    write(config);
}

/// Stores the interface language picked from the header.
pub fn persist_language(config: &mut Config, locale: &LanguageIdentifier) {
    let language = locale.to_string();
    if config.general.language.as_deref() == Some(language.as_str()) {
        return;
    }
    config.general.language = Some(language);
    write(config);
}

/// Remembers `filter` when filter memory is on and writes the config.
pub fn persist_filter(config: &mut Config, filter: EventFilter) {
    if config.gallery.remember(filter) {
        write(config);
    }
}

/// Guarded during tests so unit tests never touch the user's settings file.
fn write(config: &Config) {
    if cfg!(test) {
        return;
    }
    if let Err(error) = config::save(config) {
        log::warn!("Failed to save config: {}", error);
    }
}
