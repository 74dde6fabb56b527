//! Canonical application lists and desktop entry fixtures.

use searchbox::inventory::MemoryInventory;
use searchbox::{AppItem, Icon};
use std::path::Path;

/// The three applications used throughout the examples.
pub fn sample_inventory() -> MemoryInventory {
    MemoryInventory::from_pairs([
        ("Camera", "com.a.cam"),
        ("Calculator", "com.a.calc"),
        ("Calendar", "com.a.cal2"),
    ])
}

/// The sample list as the loader would sort it.
pub fn sample_items() -> Vec<AppItem> {
    vec![
        AppItem::new("Calculator", "com.a.calc", Icon::generic()),
        AppItem::new("Calendar", "com.a.cal2", Icon::generic()),
        AppItem::new("Camera", "com.a.cam", Icon::generic()),
    ]
}

pub fn names(items: &[AppItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

/// Writes a desktop entry below `dir`, creating parent directories.
pub fn write_entry(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// A minimal launchable application entry.
pub fn application(name: &str, icon: Option<&str>) -> String {
    let mut contents = format!("[Desktop Entry]\nType=Application\nName={name}\nExec={name}\n");
    if let Some(icon) = icon {
        contents.push_str(&format!("Icon={icon}\n"));
    }
    contents
}
