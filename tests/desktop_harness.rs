//! Desktop entry inventory integration harness.
//!
//! # What this covers
//!
//! - **Lookup order**: an entry in an earlier directory shadows the same desktop
//!   file id in a later one.
//! - **Desktop file ids**: entries in subdirectories get `-` joined ids.
//! - **Launchability**: hidden entries and non-application entries never reach
//!   the list.
//! - **Resolution**: entries without a name are skipped, entries without an
//!   icon get the generic icon.
//! - **Symlinks**: symlinked subdirectories are scanned; symlink loops never
//!   list an entry twice.
//! - **End to end**: a session over a directory tree filters and sorts as
//!   expected.
//!
//! # Running
//!
//! ```sh
//! cargo test --test desktop_harness
//! ```

mod common;
use common::*;

use searchbox::app::SearchSession;
use searchbox::inventory::{AppInventory, DesktopInventory};
use searchbox::loader::{LoadOutcome, Loader};
use searchbox::{Config, Icon};
use std::sync::Arc;
use tempfile::TempDir;

fn tree() -> (TempDir, DesktopInventory) {
    let temp = TempDir::new().unwrap();
    let user = temp.path().join("user");
    let system = temp.path().join("system");

    write_entry(&user, "org.gnome.Calculator.desktop", &application("My Calculator", Some("calc")));
    write_entry(&system, "org.gnome.Calculator.desktop", &application("Calculator", Some("calc")));
    write_entry(&system, "kde/okular.desktop", &application("Okular", Some("okular")));
    write_entry(&system, "camera.desktop", &application("Camera", None));
    write_entry(
        &system,
        "hidden.desktop",
        "[Desktop Entry]\nType=Application\nName=Hidden Helper\nExec=helper\nNoDisplay=true\n",
    );
    write_entry(
        &system,
        "docs.desktop",
        "[Desktop Entry]\nType=Link\nName=Docs\nURL=https://example.org\n",
    );
    write_entry(
        &system,
        "nameless.desktop",
        "[Desktop Entry]\nType=Application\nExec=nameless\nIcon=x\n",
    );
    write_entry(&system, "notes.txt", "not a desktop entry");

    let inventory = DesktopInventory::new(vec![user, temp.path().join("missing"), system]);
    (temp, inventory)
}

#[test]
fn enumerate_lists_each_desktop_file_id_once() {
    let (_temp, inventory) = tree();

    let mut ids: Vec<String> = inventory
        .enumerate()
        .unwrap()
        .into_iter()
        .map(|candidate| candidate.identifier)
        .collect();
    ids.sort();

    assert_eq!(
        ids,
        [
            "camera",
            "docs",
            "hidden",
            "kde-okular",
            "nameless",
            "org.gnome.Calculator",
        ]
    );
}

#[tokio::test]
async fn loader_keeps_only_launchable_named_entries() {
    let (_temp, inventory) = tree();
    let loader = Loader::new(Arc::new(inventory));

    let LoadOutcome::Loaded(report) = loader.load().unwrap().unwrap().await else {
        panic!("load was cancelled");
    };

    assert_eq!(names(&report.items), ["Camera", "My Calculator", "Okular"]);
    assert_eq!(report.not_launchable, 2);
    assert_eq!(report.skipped, 1);

    let camera = report.items.iter().find(|item| item.identifier == "camera").unwrap();
    assert_eq!(camera.icon, Icon::generic());
    let okular = report.items.iter().find(|item| item.identifier == "kde-okular").unwrap();
    assert_eq!(okular.icon.as_str(), "okular");
}

#[tokio::test]
async fn session_over_desktop_entries_filters_by_identifier() {
    let (_temp, inventory) = tree();
    let mut session = SearchSession::new(Arc::new(inventory));

    session.set_query("GNOME").unwrap();
    session.wait_for_load().await.unwrap();

    let view = session.state().view().unwrap();
    assert_eq!(names(&view.to_vec()), ["My Calculator"]);
    assert_eq!(session.viewmodel(10).header, "1 of 3 apps");
}

#[tokio::test]
async fn initialize_uses_configured_directories() {
    let (temp, _) = tree();
    let config = Config {
        application_dirs: vec![temp.path().join("system").display().to_string()],
        ..Config::default()
    };

    let mut session = searchbox::initialize(&config);
    session.set_query("calc").unwrap();
    session.wait_for_load().await.unwrap();

    let view = session.state().view().unwrap();
    assert_eq!(names(&view.to_vec()), ["Calculator"]);
}

#[test]
fn config_file_round_trips_through_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "application_dirs = [\"/opt/apps\"]\noutput = \"json\"\nmax_rows = 5\nlaunch_command = \"gtk-launch\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.application_dirs, ["/opt/apps"]);
    assert_eq!(config.output, searchbox::OutputFormat::Json);
    assert_eq!(config.max_rows, 5);
    assert_eq!(config.launch_command.as_deref(), Some("gtk-launch"));
    assert_eq!(config.trace_level, None);
}

#[test]
fn config_file_rejects_unknown_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "scan_depth = 4\n").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(searchbox::SearchboxError::Config(_))
    ));
}

// ---------------------------------------------------------------------------
// Symlinks
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn symlink_loop_lists_each_entry_once() {
    let temp = TempDir::new().unwrap();
    let apps = temp.path().join("applications");
    write_entry(&apps, "calc.desktop", &application("Calculator", Some("calc")));
    write_entry(&apps, "kde/okular.desktop", &application("Okular", Some("okular")));
    std::os::unix::fs::symlink(&apps, apps.join("loop")).unwrap();
    std::os::unix::fs::symlink(&apps, apps.join("kde").join("back")).unwrap();

    let inventory = DesktopInventory::new(vec![apps]);
    let mut ids: Vec<String> = inventory
        .enumerate()
        .unwrap()
        .into_iter()
        .map(|candidate| candidate.identifier)
        .collect();
    ids.sort();

    assert_eq!(ids, ["calc", "kde-okular"]);
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_subdirectory_is_scanned() {
    let temp = TempDir::new().unwrap();
    let apps = temp.path().join("applications");
    let vendor = temp.path().join("vendor");
    write_entry(&vendor, "viewer.desktop", &application("Viewer", None));
    std::fs::create_dir_all(&apps).unwrap();
    std::os::unix::fs::symlink(&vendor, apps.join("vendor")).unwrap();

    let loader = Loader::new(Arc::new(DesktopInventory::new(vec![apps])));
    let LoadOutcome::Loaded(report) = loader.load().unwrap().unwrap().await else {
        panic!("load was cancelled");
    };

    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].identifier, "vendor-viewer");
    assert_eq!(report.items[0].icon, Icon::generic());
}

#[tokio::test]
async fn missing_directories_load_an_empty_list() {
    let temp = TempDir::new().unwrap();
    let mut session = SearchSession::new(Arc::new(DesktopInventory::new(vec![temp.path().join("gone")])));

    session.set_query("calc").unwrap();
    session.wait_for_load().await.unwrap();

    assert_eq!(session.state().status, searchbox::SessionStatus::Ready);
    assert_eq!(session.state().count(), 0);
}
