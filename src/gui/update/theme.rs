//! gui/update/theme.rs

use iced::Task;

use super::super::state::{Encore, Message};

pub(crate) fn toggle_dark_mode(state: &mut Encore) -> Task<Message> {
    let dark = state.theme.toggle();
    tracing::debug!(dark, "theme toggled");
    Task::none()
}
