//! The external playlist collaborator seam.
//!
//! Everything the search tool needs from "the playlist" — enumerating
//! entries, reading their tags, inserting/removing entries, and being
//! told when entries change — is expressed as [`PlaylistService`]. The
//! index and query engine never see a concrete playlist type; they only
//! ever see [`Tuple`] values and entry counts handed to them by
//! whatever owns the trait object. This mirrors the teacher's `db`
//! module being the one place that knows about storage, except here
//! the "storage" is an external system this crate doesn't own.

pub mod memory;

use crate::model::SearchField;

/// The four tag values the index cares about for one playlist entry.
/// Absent tags are empty strings, matching [`crate::index::EntryTags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tuple {
    pub genre: String,
    pub artist: String,
    pub album: String,
    pub title: String,
}

impl Tuple {
    pub fn new(
        genre: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            artist: artist.into(),
            album: album.into(),
            title: title.into(),
        }
    }

    /// Field order matching [`SearchField::ALL`], ready for
    /// [`crate::index::Index::build`].
    pub fn as_entry_tags(&self) -> [String; 4] {
        [
            self.genre.clone(),
            self.artist.clone(),
            self.album.clone(),
            self.title.clone(),
        ]
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Genre => &self.genre,
            SearchField::Artist => &self.artist,
            SearchField::Album => &self.album,
            SearchField::Title => &self.title,
        }
    }
}

/// How much of the playlist changed, coarsest-to-finest. Mirrors the
/// three granularities a real playlist host reports; anything at or
/// above `Metadata` invalidates the index (spec §5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DetailLevel {
    /// Selection state changed only; no effect on tag content.
    Selection,
    /// Entries were added, removed, or reordered, but tags already
    /// indexed are unaffected (rare in practice; treated the same as
    /// `Metadata` for simplicity, matching the original's conservative
    /// `PLAYLIST_UPDATE_STRUCTURE` handling).
    Structure,
    /// Tag content changed (new entries, rescanned tags, deletions).
    Metadata,
}

/// A notification that the playlist changed, with enough detail for
/// the index to decide whether it must invalidate.
#[derive(Debug, Clone, Copy)]
pub struct UpdateDetail {
    pub level: DetailLevel,
    pub queued_entries: usize,
}

/// Everything the search tool needs from an external playlist host.
///
/// A real host (GUI shell, another plugin) and the in-memory test
/// double in [`memory`] both implement this; `index`/`query`/
/// `add_coordinator` depend only on this trait, never a concrete type.
pub trait PlaylistService: Send + Sync {
    fn entry_count(&self) -> usize;

    fn tuple(&self, entry: usize) -> Tuple;

    /// Filename/URI for an entry, used by the add-coordinator's
    /// duplicate filter.
    fn filename(&self, entry: usize) -> String;

    fn select(&mut self, entry: usize, selected: bool);

    fn is_selected(&self, entry: usize) -> bool;

    fn selected_count(&self) -> usize;

    /// Remove every currently-selected entry.
    fn delete_selected(&mut self);

    /// Insert new entries by URI, consulting `filter` once per
    /// candidate URI: `filter(uri)` returning `false` skips that URI.
    /// Newly inserted entries start unselected.
    fn insert_filtered(&mut self, uris: &[String], filter: &mut dyn FnMut(&str) -> bool);

    fn sort_by_filename(&mut self);
}
