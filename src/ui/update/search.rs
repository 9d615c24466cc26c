//! Debounced query entry and the rescan kick-off, grounded in the
//! teacher's `ui::update::scan` task-returning style.

use std::sync::Arc;
use std::time::Duration;

use iced::Task;

use crate::fold::tokenize;
use crate::fslibrary::scan;
use crate::query;
use crate::ui::state::LoadedState;
use crate::ui::Message;

/// How long the search box waits after the last keystroke before
/// actually running a query (spec §4.2 debounce).
const DEBOUNCE: Duration = Duration::from_millis(300);

/// A new character landed in the search box: record it, bump the
/// generation counter (invalidating any in-flight debounce), and arm a
/// fresh one.
pub fn handle_query_changed(state: &mut LoadedState, text: String) -> Task<Message> {
    state.query_text = text;
    state.query_generation += 1;
    let generation = state.query_generation;

    Task::perform(
        async move {
            tokio::time::sleep(DEBOUNCE).await;
            generation
        },
        Message::DebounceElapsed,
    )
}

/// The debounce timer fired. If a newer keystroke has since rearmed it,
/// this generation is stale and the search is skipped — the rearmed
/// timer will run it instead.
pub fn handle_debounce_elapsed(state: &mut LoadedState, generation: u64) -> Task<Message> {
    if generation != state.query_generation {
        return Task::none();
    }

    let terms = tokenize(&state.query_text);
    state.results = query::search(&state.index, &terms, state.config.max_results);
    state.selected_row = state.results.rows.first().copied();
    Task::none()
}

/// Kick off a rescan: walk the configured library path off the UI
/// thread, then hand the discovered URIs back for the add-coordinator
/// to dedupe and merge.
pub fn handle_rescan(state: &mut LoadedState) -> Task<Message> {
    let Some(root) = state.library_path() else {
        state.status = "no library path configured".to_string();
        return Task::none();
    };

    state.scanning = true;
    Task::perform(
        async move {
            use futures::StreamExt;
            let uris: Vec<String> = scan(root)
                .map(|path| path.to_string_lossy().into_owned())
                .collect()
                .await;
            Arc::new(uris)
        },
        Message::RescanCompleted,
    )
}
