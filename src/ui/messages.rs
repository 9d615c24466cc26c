//! All messages the search tool's controller can receive.

use std::path::PathBuf;
use std::sync::Arc;

use crate::index::ItemId;
use crate::playlist::UpdateDetail;

/// The three context-menu actions the original exposes per result row,
/// plus the query/debounce/refresh plumbing and the host's IPC hook.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search entry's text changed; (re)arms the debounce timer.
    QueryChanged(String),
    /// The debounce timer for generation `id` elapsed without being
    /// superseded by a newer keystroke; run the search now.
    DebounceElapsed(u64),
    /// The user asked to rescan the library root.
    RescanRequested,
    /// The filesystem walk finished; carries every audio file URI found
    /// under the library root, still unfiltered.
    RescanCompleted(Arc<Vec<String>>),

    /// The playlist host reported a change at some [`DetailLevel`].
    PlaylistUpdated(UpdateDetail),

    /// The host asked this instance to raise/focus itself (original:
    /// `take_message("grab focus")`).
    GrabFocus,

    /// Row actions, identified by the row's [`ItemId`] in the index the
    /// view was rendered from.
    Play(ItemId),
    CreatePlaylist(ItemId),
    AddToPlaylist(ItemId),

    PathPicked(Option<PathBuf>),
    PickPath,

    ConfigSaved(Result<(), String>),
}
