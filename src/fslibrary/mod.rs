//! A reference `PlaylistService` adapter that reads a real directory
//! of audio files with `walkdir` + `lofty`.
//!
//! This is explicitly *not* part of the tested core: it exists so
//! `main.rs` has a real playlist to point the search tool at. Grounded
//! in the teacher's `scanner/mod.rs` (directory walk) and
//! `metadata/mod.rs` (tag reads), trimmed to the four fields the index
//! cares about and with no database layer underneath.

mod scan;
mod tags;

pub use scan::scan;
pub use tags::read_tags;

use std::path::PathBuf;

use crate::playlist::{PlaylistService, Tuple};

struct Entry {
    path: PathBuf,
    tuple: Tuple,
    selected: bool,
}

/// A playlist backed by a single scanned directory tree.
pub struct FsLibrary {
    entries: Vec<Entry>,
}

impl FsLibrary {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Replace the current contents with a freshly scanned set,
    /// typically the output of [`scan_tagged`] run on a background
    /// task.
    pub fn replace_entries(&mut self, scanned: Vec<(PathBuf, Tuple)>) {
        self.entries = scanned
            .into_iter()
            .map(|(path, tuple)| Entry {
                path,
                tuple,
                selected: false,
            })
            .collect();
    }
}

/// Walk `root` and read tags for every audio file found, off the UI
/// thread. Errors reading an individual file are logged and that file
/// is skipped rather than aborting the whole scan.
///
/// Split out as a free function (rather than a `&mut self` method) so
/// it can be driven entirely inside a `Task::perform` future without
/// borrowing the `FsLibrary` it will ultimately replace.
pub async fn scan_tagged(root: PathBuf) -> Vec<(PathBuf, Tuple)> {
    use futures::StreamExt;

    let mut paths = Box::pin(scan(root));
    let mut entries = Vec::new();
    while let Some(path) = paths.next().await {
        match read_tags(&path) {
            Ok(tuple) => entries.push((path, tuple)),
            Err(e) => {
                tracing::warn!(target: "fslibrary", path = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }

    tracing::info!(target: "fslibrary", count = entries.len(), "rescan complete");
    entries
}

impl Default for FsLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistService for FsLibrary {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn tuple(&self, entry: usize) -> Tuple {
        self.entries[entry].tuple.clone()
    }

    fn filename(&self, entry: usize) -> String {
        self.entries[entry].path.to_string_lossy().into_owned()
    }

    fn select(&mut self, entry: usize, selected: bool) {
        self.entries[entry].selected = selected;
    }

    fn is_selected(&self, entry: usize) -> bool {
        self.entries[entry].selected
    }

    fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }

    fn delete_selected(&mut self) {
        self.entries.retain(|e| !e.selected);
    }

    fn insert_filtered(&mut self, uris: &[String], filter: &mut dyn FnMut(&str) -> bool) {
        for uri in uris {
            if !filter(uri) {
                continue;
            }
            let path = PathBuf::from(uri);
            let tuple = read_tags(&path).unwrap_or_default();
            self.entries.push(Entry {
                path,
                tuple,
                selected: false,
            });
        }
    }

    fn sort_by_filename(&mut self) {
        self.entries.sort_by(|a, b| a.path.cmp(&b.path));
    }
}
