//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Encore, Message};

mod navigation;
mod playback;
mod theme;

pub(crate) fn update(state: &mut Encore, message: Message) -> Task<Message> {
    match message {
        // Navigation
        Message::SelectSection(id) => navigation::select_section(state, id),

        // Toggles
        Message::ToggleDarkMode => theme::toggle_dark_mode(state),
        Message::TogglePlayPause => playback::toggle_play_pause(state),

        // Timers
        Message::TickPlayback => playback::drain_events(state),
        Message::Frame(now) => navigation::frame(state, now),
    }
}
