//! Controller state.
//!
//! No `Loading` phase here: unlike the teacher's database-backed
//! `AppState`, config load and in-memory state construction are both
//! synchronous, so there's nothing to wait on before the UI has
//! something to show.

use std::path::PathBuf;
use std::sync::Arc;

use crate::add_coordinator::AddCoordinator;
use crate::config::Config;
use crate::fslibrary::FsLibrary;
use crate::index::{Index, ItemId};
use crate::query::SearchResult;

pub struct LoadedState {
    pub config: Config,
    pub library: FsLibrary,
    pub coordinator: Arc<AddCoordinator>,

    /// The current index snapshot. Replaced wholesale on rebuild, never
    /// mutated in place, so a view render always sees a consistent tree
    /// even if a rebuild is racing in the background.
    pub index: Arc<Index>,

    pub query_text: String,
    /// Bumped on every keystroke; a pending [`crate::ui::Message::DebounceElapsed`]
    /// only runs its search if its generation still matches this value.
    pub query_generation: u64,
    pub results: SearchResult,
    /// Row selected for keyboard/action dispatch. Set to the first
    /// result row whenever a search completes with a non-empty result
    /// list, and cleared otherwise.
    pub selected_row: Option<ItemId>,

    pub scanning: bool,
    pub status: String,

    /// Filenames of the tracks under the row last sent to "Play" /
    /// "Add to Playlist" / "Create Playlist". This crate has no actual
    /// audio backend or second playlist to hand these to (spec
    /// Non-goals: playback and decoder/tuple acquisition are out of
    /// core scope) — recording the resolved set here is what a real
    /// host's action handler would otherwise be given.
    pub last_action_files: Vec<String>,
}

impl LoadedState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            library: FsLibrary::new(),
            coordinator: Arc::new(AddCoordinator::new()),
            index: Arc::new(Index::new()),
            query_text: String::new(),
            query_generation: 0,
            results: SearchResult {
                rows: Vec::new(),
                hidden: 0,
            },
            selected_row: None,
            scanning: false,
            status: String::new(),
            last_action_files: Vec::new(),
        }
    }

    pub fn library_path(&self) -> Option<PathBuf> {
        self.config.path.clone()
    }
}
