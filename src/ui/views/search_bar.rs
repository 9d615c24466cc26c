//! Search entry plus the "choose folder + refresh" row (spec §6
//! Widget surface).

use iced::widget::{button, row, text, text_input};
use iced::{Element, Length};

use crate::ui::state::LoadedState;
use crate::ui::Message;

pub fn search_row(state: &LoadedState) -> Element<'_, Message> {
    let entry = text_input("Search your library...", &state.query_text)
        .on_input(Message::QueryChanged)
        .padding(8)
        .width(Length::FillPortion(3));

    let folder_button = button(text("Choose Folder")).on_press(Message::PickPath);

    let refresh_label = if state.scanning { "Scanning..." } else { "Refresh" };
    let mut refresh_button = button(text(refresh_label));
    if !state.scanning {
        refresh_button = refresh_button.on_press(Message::RescanRequested);
    }

    row![entry, folder_button, refresh_button]
        .spacing(8)
        .width(Length::Fill)
        .into()
}
