//! The flat result list (spec §6: "a results list (tree view, flat,
//! drag-source)"). Rows render with [`crate::label::rich`]; the
//! drag-and-drop payload itself is out of scope for this widget layer
//! (no desktop DnD host to target), but the URIs it would resolve are
//! exactly what the row actions already resolve internally.

use iced::widget::{button, column, row, text, Column};
use iced::{Element, Length};

use crate::label;
use crate::ui::state::LoadedState;
use crate::ui::Message;

pub fn result_list(state: &LoadedState) -> Element<'_, Message> {
    let rows = state.results.rows.iter().map(|&id| {
        let item = state.index.get(id);
        let label_text = if state.selected_row == Some(id) {
            format!("> {}", label::plain(item))
        } else {
            label::plain(item)
        };

        row![
            text(label_text).width(Length::Fill),
            button(text("Play")).on_press(Message::Play(id)),
            button(text("Add")).on_press(Message::AddToPlaylist(id)),
            button(text("New Playlist")).on_press(Message::CreatePlaylist(id)),
        ]
        .spacing(8)
        .into()
    });

    let list: Column<'_, Message> = column(rows).spacing(4);
    list.width(Length::Fill).into()
}
