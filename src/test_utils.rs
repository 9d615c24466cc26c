//! Test fixtures shared across modules, grounded in the teacher's
//! `test_utils.rs` fixture-builder pattern.

use crate::index::{EntryTags, Index};
use crate::playlist::{PlaylistService, Tuple};

/// Build an [`Index`] directly from a list of `(genre, artist, album,
/// title)` tuples, skipping the playlist-service plumbing entirely.
pub fn index_from_tuples(rows: &[(&str, &str, &str, &str)]) -> Index {
    let entries: Vec<EntryTags> = rows
        .iter()
        .map(|&(g, a, al, t)| [g.to_string(), a.to_string(), al.to_string(), t.to_string()])
        .collect();

    let mut index = Index::new();
    index.build(entries.len(), |e| entries[e].clone());
    index
}

/// A `PlaylistService` recorder: logs every filter/select call it
/// receives, for tests asserting on the add-coordinator's interaction
/// pattern rather than just its end state.
pub struct RecordingPlaylist {
    inner: crate::playlist::memory::MemoryPlaylist,
    pub selects: Vec<(usize, bool)>,
}

impl RecordingPlaylist {
    pub fn new() -> Self {
        Self {
            inner: crate::playlist::memory::MemoryPlaylist::new(),
            selects: Vec::new(),
        }
    }

    pub fn push(&mut self, filename: impl Into<String>, tuple: Tuple) {
        self.inner.push(filename, tuple);
    }
}

impl Default for RecordingPlaylist {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistService for RecordingPlaylist {
    fn entry_count(&self) -> usize {
        self.inner.entry_count()
    }

    fn tuple(&self, entry: usize) -> Tuple {
        self.inner.tuple(entry)
    }

    fn filename(&self, entry: usize) -> String {
        self.inner.filename(entry)
    }

    fn select(&mut self, entry: usize, selected: bool) {
        self.selects.push((entry, selected));
        self.inner.select(entry, selected);
    }

    fn is_selected(&self, entry: usize) -> bool {
        self.inner.is_selected(entry)
    }

    fn selected_count(&self) -> usize {
        self.inner.selected_count()
    }

    fn delete_selected(&mut self) {
        self.inner.delete_selected();
    }

    fn insert_filtered(&mut self, uris: &[String], filter: &mut dyn FnMut(&str) -> bool) {
        self.inner.insert_filtered(uris, filter);
    }

    fn sort_by_filename(&mut self) {
        self.inner.sort_by_filename();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchField;

    #[test]
    fn index_from_tuples_matches_manual_build() {
        let idx = index_from_tuples(&[("", "The Beatles", "Abbey Road", "Something")]);
        assert!(idx.root().any(|r| r.field() == SearchField::Artist));
    }

    #[test]
    fn recording_playlist_logs_every_select() {
        let mut pl = RecordingPlaylist::new();
        pl.push("a.mp3", Tuple::default());
        pl.select(0, true);
        assert_eq!(pl.selects, vec![(0, true)]);
    }
}
