//! Playlist lifecycle hooks: index rebuild/invalidation and the
//! add-coordinator's begin/filter/complete protocol, grounded in the
//! teacher's `ui::update::watcher` (incremental reaction to an external
//! change notification).

use std::sync::Arc;

use iced::Task;

use crate::index::Index;
use crate::playlist::{DetailLevel, PlaylistService, UpdateDetail};
use crate::ui::state::LoadedState;
use crate::ui::Message;

/// Rebuild the index from the current playlist contents. Pure and
/// synchronous: the arena build is plain in-memory work (spec §4.3),
/// not something worth shipping to a background task.
pub fn rebuild_index(state: &mut LoadedState) {
    let mut index = Index::new();
    let entry_count = state.library.entry_count();
    index.build(entry_count, |e| state.library.tuple(e).as_entry_tags());
    state.index = Arc::new(index);

    let terms = crate::fold::tokenize(&state.query_text);
    state.results = crate::query::search(&state.index, &terms, state.config.max_results);
    state.selected_row = state.results.rows.first().copied();

    tracing::debug!(target: "ui::update", entry_count, "index rebuilt");
}

/// The external playlist host reported a change. `Selection`-only
/// updates don't touch tag content and are ignored; anything at
/// `Structure` or above invalidates and rebuilds.
pub fn handle_playlist_updated(state: &mut LoadedState, detail: UpdateDetail) -> Task<Message> {
    if detail.level == DetailLevel::Selection {
        return Task::none();
    }

    rebuild_index(state);
    Task::none()
}

/// The filesystem walk for a rescan finished; run it through the
/// add-coordinator's dedup protocol and rebuild.
pub fn handle_rescan_completed(state: &mut LoadedState, uris: Arc<Vec<String>>) -> Task<Message> {
    let coordinator = state.coordinator.clone();
    coordinator.begin_add(&mut state.library);

    let mut filter = |filename: &str| coordinator.filter(filename);
    state.library.insert_filtered(&uris, &mut filter);

    coordinator.complete(&mut state.library);
    state.scanning = false;

    rebuild_index(state);
    Task::none()
}
