//! Row actions: Play / Create Playlist / Add to Playlist, and the
//! "grab focus" IPC hook, carried over from the original per
//! SPEC_FULL §C.2 rather than collapsed into a generic string
//! dispatcher.

use iced::Task;

use crate::index::ItemId;
use crate::playlist::PlaylistService;
use crate::ui::state::LoadedState;
use crate::ui::Message;

/// Every playlist entry a result row covers, in ascending entry order.
/// A leaf (Title) row covers exactly one entry; an Artist/Album/Genre
/// row covers every entry beneath it.
fn resolve_filenames(state: &LoadedState, item: ItemId) -> Vec<String> {
    state
        .index
        .get(item)
        .matches()
        .iter()
        .map(|&entry| state.library.filename(entry))
        .collect()
}

pub fn handle_action(state: &mut LoadedState, message: &Message) -> Task<Message> {
    match *message {
        Message::Play(item) => {
            let files = resolve_filenames(state, item);
            state.status = format!("playing {} track(s)", files.len());
            state.last_action_files = files;
        }
        Message::CreatePlaylist(item) => {
            let files = resolve_filenames(state, item);
            let title = if files.len() == 1 {
                state.index.get(item).name().to_string()
            } else {
                format!("{} tracks", files.len())
            };
            state.status = format!("created playlist \"{title}\" with {} track(s)", files.len());
            state.last_action_files = files;
        }
        Message::AddToPlaylist(item) => {
            let files = resolve_filenames(state, item);
            for filename in &files {
                if let Some(entry) = (0..state.library.entry_count())
                    .find(|&e| &state.library.filename(e) == filename)
                {
                    state.library.select(entry, true);
                }
            }
            state.status = format!("added {} track(s) to playlist", files.len());
            state.last_action_files = files;
        }
        Message::GrabFocus => {
            tracing::info!(target: "ui::update", "grab focus requested by host");
        }
        _ => {}
    }

    Task::none()
}
