//! core/playback/toggle.rs
//! Two-state play/pause machine on top of an `AudioHandle`.
//!
//! `toggle` flips the state optimistically and issues exactly one command.
//! Engine events then confirm or correct it:
//! - `Ended` while playing -> paused
//! - `StartFailed` -> paused (the caller logs and shows the reason)

use super::{AudioHandle, PlayerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

pub struct PlaybackToggle {
    state: PlaybackState,
    audio: AudioHandle,
}

impl PlaybackToggle {
    pub fn new(audio: AudioHandle) -> Self {
        Self {
            state: PlaybackState::Paused,
            audio,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Whether the audio resource is still held (listener included).
    pub fn is_attached(&self) -> bool {
        self.audio.is_attached()
    }

    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Paused => {
                if self.audio.play() {
                    self.state = PlaybackState::Playing;
                }
            }
            PlaybackState::Playing => {
                self.audio.pause();
                self.state = PlaybackState::Paused;
            }
        }
        self.state
    }

    /// Apply one engine event. Returns true if the state changed.
    pub fn apply(&mut self, event: &PlayerEvent) -> bool {
        let next = match event {
            PlayerEvent::Started => PlaybackState::Playing,
            PlayerEvent::Paused | PlayerEvent::Ended | PlayerEvent::StartFailed(_) => {
                PlaybackState::Paused
            }
        };

        let changed = self.state != next;
        self.state = next;
        changed
    }

    /// Drain the listener and apply every event in arrival order.
    pub fn poll(&mut self) -> Vec<PlayerEvent> {
        let events = self.audio.drain();
        for event in &events {
            self.apply(event);
        }
        events
    }

    /// Tear the resource down now instead of waiting for drop.
    pub fn release(&mut self) {
        self.audio.release();
        self.state = PlaybackState::Paused;
    }
}
