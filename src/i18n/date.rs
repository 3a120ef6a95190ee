// SPDX-License-Identifier: MPL-2.0
//! Locale-aware rendering of event dates.

use crate::catalog::Event;
use chrono::{Locale, NaiveDate};
use unic_langid::LanguageIdentifier;

/// Long date pattern for a UI language.
fn pattern_for(locale: &LanguageIdentifier) -> (&'static str, Locale) {
    match locale.language.as_str() {
        "fr" => ("%-d %B %Y", Locale::fr_FR),
        _ => ("%B %-d, %Y", Locale::en_US),
    }
}

/// Formats `date` the way the UI language writes it, e.g. `March 15, 2024`
/// or `15 mars 2024`.
#[must_use]
pub fn format_long(date: NaiveDate, locale: &LanguageIdentifier) -> String {
    let (pattern, chrono_locale) = pattern_for(locale);
    date.format_localized(pattern, chrono_locale).to_string()
}

/// Formats the date of `event`, or returns it verbatim when it does not parse.
#[must_use]
pub fn format_event_date(event: &Event, locale: &LanguageIdentifier) -> String {
    event
        .parsed_date()
        .map_or_else(|| event.date.clone(), |date| format_long(date, locale))
}
