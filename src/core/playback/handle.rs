//! core/playback/handle.rs
//! Scoped ownership of the audio resource.
//!
//! A player and its completion listener are acquired together and released
//! together. Release order is fixed: unsubscribe, pause, then drop the player.
//! `Drop` runs the same release, so every exit path (normal shutdown, early
//! return, replacing the handle) tears down the same way.

use std::path::Path;
use std::sync::mpsc::Receiver;

use super::{MediaPlayer, PlayerEvent};

pub struct AudioHandle {
    player: Option<Box<dyn MediaPlayer>>,
    listener: Option<Receiver<PlayerEvent>>,
}

impl AudioHandle {
    pub fn acquire(mut player: Box<dyn MediaPlayer>, uri: &Path) -> Self {
        player.load(uri);
        let listener = player.subscribe();
        tracing::debug!(uri = %uri.display(), "audio handle acquired");

        Self {
            player: Some(player),
            listener: Some(listener),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.player.is_some()
    }

    /// Returns false when already released.
    pub fn play(&mut self) -> bool {
        match self.player.as_mut() {
            Some(player) => {
                player.play();
                true
            }
            None => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        match self.player.as_mut() {
            Some(player) => {
                player.pause();
                true
            }
            None => false,
        }
    }

    /// Everything the listener has received so far. Empty once released.
    pub fn drain(&self) -> Vec<PlayerEvent> {
        match &self.listener {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Idempotent.
    pub fn release(&mut self) {
        let Some(mut player) = self.player.take() else {
            self.listener = None;
            return;
        };

        player.unsubscribe();
        self.listener = None;
        player.pause();
        drop(player);

        tracing::debug!("audio handle released");
    }
}

impl Drop for AudioHandle {
    fn drop(&mut self) {
        self.release();
    }
}
