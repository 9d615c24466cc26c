//! UI module for the search tool.

mod messages;
mod state;
mod update;
mod views;

use iced::widget::container;
use iced::{Element, Length, Subscription, Task};

pub use messages::Message;
use state::LoadedState;

pub struct SearchTool {
    state: LoadedState,
}

impl SearchTool {
    pub fn new() -> (Self, Task<Message>) {
        let config = crate::config::load();
        let mut state = LoadedState::new(config);

        let rescan = if state.config.rescan_on_startup && state.library_path().is_some() {
            update::handle_rescan(&mut state)
        } else {
            Task::none()
        };

        (Self { state }, rescan)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(views::loaded_view(&self.state))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        tracing::trace!(target: "ui::update", ?message, "update received");

        if let Message::PickPath = message {
            return pick_folder();
        }

        let s = &mut self.state;

        match message {
            Message::QueryChanged(text) => update::handle_query_changed(s, text),
            Message::DebounceElapsed(generation) => update::handle_debounce_elapsed(s, generation),

            Message::RescanRequested => update::handle_rescan(s),
            Message::RescanCompleted(uris) => update::handle_rescan_completed(s, uris),

            Message::PlaylistUpdated(detail) => update::handle_playlist_updated(s, detail),

            Message::GrabFocus | Message::Play(_) | Message::CreatePlaylist(_) | Message::AddToPlaylist(_) => {
                update::handle_action(s, &message)
            }

            Message::PathPicked(Some(path)) => {
                s.config.path = Some(path);
                let config = s.config.clone();
                Task::batch([
                    update::handle_rescan(s),
                    Task::perform(
                        async move { crate::config::save_async(config).await.map_err(|e| e.to_string()) },
                        Message::ConfigSaved,
                    ),
                ])
            }
            Message::PathPicked(None) => Task::none(),
            Message::PickPath => Task::none(),

            Message::ConfigSaved(Err(e)) => {
                tracing::error!(target: "ui::update", error = %e, "failed to save config");
                Task::none()
            }
            Message::ConfigSaved(Ok(())) => Task::none(),
        }
    }
}

fn pick_folder() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .pick_folder()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::PathPicked,
    )
}
