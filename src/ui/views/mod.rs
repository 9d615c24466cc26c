//! View rendering, split the way the teacher splits `ui::views`.

mod labels;
mod results;
mod search_bar;

use iced::widget::column;
use iced::{Element, Length};

use crate::ui::state::LoadedState;
use crate::ui::Message;

/// The visibility state machine from the query engine's UI contract:
/// exactly one of help / wait / results+stats is shown at a time.
pub fn loaded_view(state: &LoadedState) -> Element<'_, Message> {
    if state.library_path().is_none() {
        return labels::help_label();
    }

    if !state.index.is_valid() {
        return labels::wait_label();
    }

    column![
        search_bar::search_row(state),
        labels::stats_label(&state.results),
        results::result_list(state),
    ]
    .spacing(8)
    .width(Length::Fill)
    .into()
}
