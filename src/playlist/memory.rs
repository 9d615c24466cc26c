//! An in-memory [`PlaylistService`], used by tests and as the default
//! backing store when no external host is wired in.
//!
//! Grounded in the teacher's `db` module's row-shape (`TrackWithMetadata`)
//! but with no SQL layer underneath: the search tool never persists
//! playlist contents itself, so a plain `Vec` is the whole story.

use super::{PlaylistService, Tuple};

#[derive(Debug, Clone)]
struct Entry {
    filename: String,
    tuple: Tuple,
    selected: bool,
}

#[derive(Default)]
pub struct MemoryPlaylist {
    entries: Vec<Entry>,
}

impl MemoryPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filename: impl Into<String>, tuple: Tuple) {
        self.entries.push(Entry {
            filename: filename.into(),
            tuple,
            selected: false,
        });
    }
}

impl PlaylistService for MemoryPlaylist {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn tuple(&self, entry: usize) -> Tuple {
        self.entries[entry].tuple.clone()
    }

    fn filename(&self, entry: usize) -> String {
        self.entries[entry].filename.clone()
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
            self.entries.push(Entry {
                filename: uri.clone(),
                tuple: Tuple::default(),
                selected: false,
            });
        }
    }

    fn sort_by_filename(&mut self) {
        self.entries.sort_by(|a, b| a.filename.cmp(&b.filename));
    }
}
