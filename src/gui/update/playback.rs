//! gui/update/playback.rs
//! GUI-playback bridge
//!
//! - GUI never touches rodio directly.
//! - All IO / timing is driven by the engine + TickPlayback polling.

use iced::Task;

use super::super::state::{Encore, Message};
use crate::core::playback::PlayerEvent;

pub(crate) fn toggle_play_pause(state: &mut Encore) -> Task<Message> {
    if !state.playback.is_attached() {
        state.status = Some("Audio is not available.".into());
        return Task::none();
    }

    state.status = None;
    let next = state.playback.toggle();
    tracing::debug!(?next, "play/pause toggled");

    Task::none()
}

pub(crate) fn drain_events(state: &mut Encore) -> Task<Message> {
    for event in state.playback.poll() {
        match event {
            PlayerEvent::Started => tracing::debug!("playback started"),
            PlayerEvent::Paused => tracing::debug!("playback paused"),
            PlayerEvent::Ended => tracing::debug!("playback reached the end"),
            PlayerEvent::StartFailed(reason) => {
                tracing::warn!("could not play sample: {reason}");
                state.status = Some(format!("Playback failed: {reason}"));
            }
        }
    }

    Task::none()
}
