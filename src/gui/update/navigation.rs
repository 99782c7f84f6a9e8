//! gui/update/navigation.rs
//!
//! Section selection + the fade that follows it.

use std::time::Instant;

use iced::Task;

use super::super::state::{Encore, Message};
use crate::core::SectionId;

pub(crate) fn select_section(state: &mut Encore, id: SectionId) -> Task<Message> {
    if !state.selector.set_active(id) {
        return Task::none();
    }

    tracing::debug!(section = %id, "section selected");

    // Restart from the entering state; the frame subscription wakes up
    // because the fade is animating again.
    let now = Instant::now();
    state.now = now;
    state.fade.restart(now);

    Task::none()
}

pub(crate) fn frame(state: &mut Encore, now: Instant) -> Task<Message> {
    // Never step backwards; a stale tick must not rewind the fade.
    if now > state.now {
        state.now = now;
    }
    Task::none()
}
