//! Library-add coordinator: de-duplicates a batch add against the
//! current playlist contents and reconciles selection state once the
//! underlying insert completes.
//!
//! Ported from the original's `begin_add` / `filter_cb` / `add_complete_cb`
//! triad. The only shared mutable state between the synchronous caller
//! and the filter callback (which the playlist host may invoke from a
//! worker thread while streaming in new entries) is `adding` and
//! `added_table`, both behind one [`parking_lot::Mutex`] — never two
//! locks, so there's no lock-ordering question to get wrong.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::playlist::PlaylistService;

struct Shared {
    adding: bool,
    // filename -> "already present before this add began"
    added_table: HashMap<String, bool>,
}

/// Coordinates one library (re)scan's worth of additions against a
/// [`PlaylistService`], suppressing duplicates by filename.
pub struct AddCoordinator {
    shared: Mutex<Shared>,
}

impl Default for AddCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl AddCoordinator {
    pub fn new() -> Self {
        Self {
            shared: Mutex::new(Shared {
                adding: false,
                added_table: HashMap::new(),
            }),
        }
    }

    /// Start a refresh: dedupe the playlist's existing entries by
    /// filename up front (deleting the duplicates), seed `added_table`
    /// with every surviving filename (value `false`: present before this
    /// add began, not yet seen by the scan), and arm `adding`.
    pub fn begin_add(&self, playlist: &mut dyn PlaylistService) {
        let mut shared = self.shared.lock();
        shared.added_table.clear();
        for entry in 0..playlist.entry_count() {
            let filename = playlist.filename(entry);
            let is_dup = shared.added_table.contains_key(&filename);
            playlist.select(entry, is_dup);
            if !is_dup {
                shared.added_table.insert(filename, false);
            }
        }
        drop(shared);
        playlist.delete_selected();

        let mut shared = self.shared.lock();
        shared.adding = true;
        tracing::debug!(target: "add_coordinator", "refresh started");
    }

    /// The filter passed to [`PlaylistService::insert_filtered`]:
    /// returns `true` (accept) exactly once per distinct filename while
    /// a refresh is in progress, `false` otherwise.
    pub fn filter(&self, filename: &str) -> bool {
        let mut shared = self.shared.lock();
        if !shared.adding {
            return false;
        }
        match shared.added_table.get(filename).copied() {
            None => {
                shared.added_table.insert(filename.to_string(), true);
                true
            }
            Some(_) => {
                shared.added_table.insert(filename.to_string(), true);
                false
            }
        }
    }

    /// Finish a refresh: disarm `adding`, then reconcile selection so
    /// that entries the scan never touched (stale leftovers) end up
    /// selected for deletion — unless the scan found nothing at all, in
    /// which case we never wipe a playlist that already had content.
    pub fn complete(&self, playlist: &mut dyn PlaylistService) {
        {
            let mut shared = self.shared.lock();
            shared.adding = false;
        }

        let seen_table = self.shared.lock().added_table.clone();
        let total = playlist.entry_count();
        let mut selected_count = 0;
        for entry in 0..total {
            let filename = playlist.filename(entry);
            let stale = !seen_table.get(&filename).copied().unwrap_or(false);
            playlist.select(entry, stale);
            if stale {
                selected_count += 1;
            }
        }

        if selected_count > 0 && selected_count < total {
            playlist.delete_selected();
        } else {
            for entry in 0..playlist.entry_count() {
                playlist.select(entry, false);
            }
        }

        self.shared.lock().added_table.clear();
        playlist.sort_by_filename();
        tracing::debug!(target: "add_coordinator", selected_count, total, "refresh completed");
    }

    #[cfg(test)]
    fn is_adding(&self) -> bool {
        self.shared.lock().adding
    }
}
