// SPDX-License-Identifier: MPL-2.0
use committee_gallery::app::config::{self, Config};
use committee_gallery::catalog::{self, Catalog, EventFilter};
use committee_gallery::gallery::{Effect, Message, OverlaySnapshot, State, Tab};
use committee_gallery::i18n::fluent::I18n;
use committee_gallery::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

const CATALOG: &str = r#"
[[events]]
id = 10
title = "Robotics Workshop"
date = "2024-03-15"
image = "covers/robotics.png"
status = "completed"
description = "Hands-on robotics."
gallery = ["photos/a.png", "photos/b.png", "photos/c.png"]

[[events]]
id = 20
title = "AI Summit"
date = "2024-06-15"
image = "https://example.com/summit.jpg"
status = "upcoming"
description = "Talks about AI."
gallery = ["https://example.com/summit-1.jpg"]

[[events]]
id = 30
title = "Hackathon"
date = "2024-01-20"
image = "covers/hack.png"
status = "completed"
description = "48 hours of code."
gallery = ["photos/h1.png", "photos/h2.png"]

[[videos]]
id = 1
title = "Keynote"
thumbnail = "thumbs/keynote.png"
url = "https://video.example.com/keynote"

[[magazines]]
id = 1
title = "Issue 1"
image = "covers/issue1.png"
url = "https://magazine.example.com/1"
"#;

fn write_catalog(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, content).expect("write catalog");
    (dir, path)
}

#[test]
fn catalog_file_drives_the_gallery() {
    let (dir, path) = write_catalog(CATALOG);
    let (catalog, warning) = catalog::load(Some(path.as_path()));
    assert!(warning.is_none());
    assert_eq!(catalog.base_dir.as_deref(), Some(dir.path()));

    let mut state = State::default();
    assert_eq!(state.snapshot(&catalog).items, vec![10, 20, 30]);

    state.handle(Message::SelectFilter(EventFilter::Past), &catalog);
    assert_eq!(state.snapshot(&catalog).items, vec![10, 30]);

    state.handle(Message::SelectFilter(EventFilter::Upcoming), &catalog);
    assert_eq!(state.snapshot(&catalog).items, vec![20]);
}

#[test]
fn carousel_walks_and_wraps_through_gallery() {
    let (_dir, path) = write_catalog(CATALOG);
    let (catalog, _) = catalog::load(Some(path.as_path()));
    let mut state = State::default();

    state.handle(Message::OpenEvent(10), &catalog);
    let index = |state: &State| state.snapshot(&catalog).overlay.map(|o| o.index);

    assert_eq!(index(&state), Some(0));
    state.handle(Message::NextImage, &catalog);
    assert_eq!(index(&state), Some(1));
    state.handle(Message::NextImage, &catalog);
    assert_eq!(index(&state), Some(2));
    state.handle(Message::NextImage, &catalog);
    assert_eq!(index(&state), Some(0));
    state.handle(Message::PreviousImage, &catalog);
    assert_eq!(index(&state), Some(2));
}

#[test]
fn dots_jump_within_the_open_gallery_only() {
    let (_dir, path) = write_catalog(CATALOG);
    let (catalog, _) = catalog::load(Some(path.as_path()));
    let mut state = State::default();

    state.handle(Message::OpenEvent(10), &catalog);
    let third = state
        .overlay()
        .carousel()
        .and_then(|c| c.slide(2))
        .expect("three slides");
    state.handle(Message::JumpTo(third), &catalog);
    assert_eq!(state.snapshot(&catalog).overlay.map(|o| o.index), Some(2));

    // A slide from the three-image gallery does not exist in a two-image one.
    state.handle(Message::OpenEvent(30), &catalog);
    state.handle(Message::JumpTo(third), &catalog);
    assert_eq!(
        state.snapshot(&catalog).overlay,
        Some(OverlaySnapshot {
            event_id: 30,
            index: 0,
            len: 2,
            navigation: true,
        })
    );
}

#[test]
fn reopening_resets_carousel_and_close_clears_selection() {
    let catalog = Catalog::from_toml_str(CATALOG).expect("valid catalog");
    let mut state = State::default();

    state.handle(Message::OpenEvent(10), &catalog);
    state.handle(Message::NextImage, &catalog);
    state.handle(Message::OpenEvent(10), &catalog);
    assert_eq!(state.snapshot(&catalog).overlay.map(|o| o.index), Some(0));

    state.handle(Message::CloseOverlay, &catalog);
    assert!(state.selected_event().is_none());
}

#[test]
fn videos_and_magazines_request_links() {
    let catalog = Catalog::from_toml_str(CATALOG).expect("valid catalog");
    let mut state = State::new(Tab::Videos, EventFilter::All);

    assert_eq!(
        state.handle(Message::OpenVideo(1), &catalog),
        Effect::OpenLink("https://video.example.com/keynote".into())
    );
    assert_eq!(
        state.handle(Message::OpenMagazine(1), &catalog),
        Effect::OpenLink("https://magazine.example.com/1".into())
    );
    assert_eq!(state.handle(Message::OpenVideo(99), &catalog), Effect::None);
}

#[test]
fn invalid_catalog_falls_back_with_warning() {
    let broken = CATALOG.replace(
        r#"gallery = ["https://example.com/summit-1.jpg"]"#,
        "gallery = []",
    );
    let (_dir, path) = write_catalog(&broken);

    let (catalog, warning) = catalog::load(Some(path.as_path()));
    assert_eq!(catalog, Catalog::sample());
    assert_eq!(
        warning.as_deref(),
        Some("notification-catalog-empty-gallery")
    );
}

#[test]
fn missing_catalog_falls_back_with_read_warning() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let (catalog, warning) = catalog::load(Some(missing.as_path()));
    assert_eq!(catalog, Catalog::sample());
    assert_eq!(warning.as_deref(), Some("notification-catalog-read-error"));
}

#[test]
fn preferences_round_trip_through_settings_file() {
    let dir = tempdir().expect("temp dir");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.general.theme_mode = ThemeMode::Dark;
    config.gallery.default_tab = Tab::Magazine;
    assert!(config.gallery.remember(EventFilter::Upcoming));
    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_eq!(loaded.gallery.startup_filter(), EventFilter::Upcoming);

    let state = State::new(loaded.gallery.default_tab, loaded.gallery.startup_filter());
    assert_eq!(state.active_tab(), Tab::Magazine);
    assert_eq!(state.event_filter(), EventFilter::Upcoming);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("tab-magazine"), "Magazine");
}
