//! Freedesktop `.desktop` inventory.
//!
//! Discovers installed applications the way Linux launchers do: by scanning the
//! `applications` directories under the XDG data directories for desktop entry
//! files. Each file becomes one [`Candidate`] whose identifier is the desktop file
//! id (`org.gnome.Calculator`, `kde-okular`).
//!
//! # Lookup order
//!
//! Directories are scanned in the order given. When two directories contain the
//! same desktop file id, the first one wins, so `~/.local/share/applications`
//! overrides the system directories when it comes first.
//!
//! Subdirectories are scanned recursively and symlinks are followed; symlink
//! loops are skipped. If none of the directories exists, enumeration fails
//! with [`SearchboxError::Inventory`].
//!
//! # Parsing
//!
//! Only the `[Desktop Entry]` group is read and only the keys `Type`, `Name`,
//! `Exec`, `Icon`, `NoDisplay` and `Hidden`. Localized keys (`Name[de]`) are
//! ignored.

use crate::domain::error::{Result, SearchboxError};
use crate::domain::{AppItem, Icon};
use crate::infrastructure::paths;
use crate::inventory::backend::{resolve_label, AppInventory, Candidate};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DESKTOP_SUFFIX: &str = ".desktop";

/// Fields read from the `[Desktop Entry]` group of a desktop file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub entry_type: Option<String>,
    pub name: Option<String>,
    pub exec: Option<String>,
    pub icon: Option<String>,
    pub no_display: bool,
    pub hidden: bool,
}

impl DesktopEntry {
    /// Parses the `[Desktop Entry]` group of a desktop file.
    ///
    /// Unknown keys, comments and other groups are skipped. When a key repeats, the
    /// first value is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchbox::inventory::DesktopEntry;
    ///
    /// let entry = DesktopEntry::parse("[Desktop Entry]\nType=Application\nName=Files\nExec=nautilus\n");
    /// assert_eq!(entry.name.as_deref(), Some("Files"));
    /// assert!(entry.is_application());
    /// ```
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let mut entry = Self::default();
        let mut in_entry_group = false;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') {
                in_entry_group = line == "[Desktop Entry]";
                continue;
            }

            if !in_entry_group {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = unescape(value.trim());

            let slot = match key.trim() {
                "Type" => &mut entry.entry_type,
                "Name" => &mut entry.name,
                "Exec" => &mut entry.exec,
                "Icon" => &mut entry.icon,
                "NoDisplay" => {
                    entry.no_display = value == "true";
                    continue;
                }
                "Hidden" => {
                    entry.hidden = value == "true";
                    continue;
                }
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        entry
    }

    #[must_use]
    pub fn is_application(&self) -> bool {
        self.entry_type.as_deref() == Some("Application")
    }

    /// Converts the entry into a candidate with the given desktop file id.
    ///
    /// Non-application entries (links, directories) get no entry point, so the
    /// default launchability predicate rejects them.
    #[must_use]
    pub fn into_candidate(self, identifier: String, origin: PathBuf) -> Candidate {
        let entry_point = if self.is_application() { self.exec } else { None };
        Candidate {
            identifier,
            label: self.name,
            icon: self.icon,
            entry_point,
            hidden: self.no_display || self.hidden,
            origin: Some(origin),
        }
    }
}

/// Undoes the string escapes of the desktop entry format.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Inventory that scans XDG application directories for desktop entries.
#[derive(Debug, Clone)]
pub struct DesktopInventory {
    dirs: Vec<PathBuf>,
}

impl DesktopInventory {
    /// Creates an inventory over explicit application directories.
    #[must_use]
    pub const fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Creates an inventory over the XDG application directories of the current
    /// environment.
    #[must_use]
    pub fn from_environment() -> Self {
        Self::new(paths::application_dirs())
    }

    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Collects `(desktop file id, path)` pairs below `root`, sorted by file name.
    ///
    /// Symlinks are followed. A link back to an ancestor directory is reported by
    /// the walker as a loop and skipped, so every real file is reached through
    /// finitely many paths.
    fn collect_entries(root: &Path) -> Vec<(String, PathBuf)> {
        WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    if e.loop_ancestor().is_some() {
                        tracing::debug!(path = ?e.path(), "skipping symlink loop");
                    } else {
                        tracing::debug!(error = %e, "skipping unreadable path");
                    }
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let id = desktop_file_id(root, entry.path())?;
                Some((id, entry.into_path()))
            })
            .collect()
    }
}

/// Derives the desktop file id of `path` relative to the applications directory.
///
/// `applications/kde/okular.desktop` has the id `kde-okular`.
fn desktop_file_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.to_str()?;
    let stem = relative.strip_suffix(DESKTOP_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.replace(std::path::MAIN_SEPARATOR, "-"))
}

impl AppInventory for DesktopInventory {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        let _span = tracing::debug_span!("desktop_enumerate", dirs = self.dirs.len()).entered();

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut scanned = 0;

        for dir in &self.dirs {
            if !dir.is_dir() {
                tracing::trace!(dir = ?dir, "application directory missing");
                continue;
            }
            scanned += 1;

            for (id, path) in Self::collect_entries(dir) {
                if !seen.insert(id.clone()) {
                    tracing::trace!(id = %id, path = ?path, "shadowed by earlier directory");
                    continue;
                }

                match std::fs::read_to_string(&path) {
                    Ok(contents) => {
                        candidates.push(DesktopEntry::parse(&contents).into_candidate(id, path));
                    }
                    Err(e) => {
                        tracing::debug!(path = ?path, error = %e, "skipping unreadable desktop entry");
                    }
                }
            }
        }

        if scanned == 0 {
            return Err(SearchboxError::Inventory(format!(
                "none of the {} application directories exist",
                self.dirs.len()
            )));
        }

        tracing::debug!(count = candidates.len(), dirs = scanned, "desktop entries enumerated");
        Ok(candidates)
    }

    /// Resolves the entry name; a missing icon falls back to the generic one.
    fn resolve(&self, candidate: &Candidate) -> Result<AppItem> {
        let name = resolve_label(candidate)?;
        let icon = candidate
            .icon
            .as_deref()
            .filter(|icon| !icon.trim().is_empty())
            .map_or_else(Icon::generic, Icon::new);

        Ok(AppItem::new(name, candidate.identifier.clone(), icon))
    }
}
