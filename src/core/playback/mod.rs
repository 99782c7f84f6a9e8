//! core/playback/mod.rs
//! Encore playback core module.
//!
//! - `MediaPlayer` is the seam between the play/pause toggle and whatever
//!   actually makes sound. The GUI only ever talks to this trait.
//! - `PlaybackController` implements it over a rodio engine thread.
//! - `AudioHandle` owns a player plus its completion listener as one unit.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use thiserror::Error;

mod engine;
mod handle;
#[cfg(test)]
pub(crate) mod testing;
mod toggle;

pub use engine::PlaybackEngine;
pub use handle::AudioHandle;
pub use toggle::{PlaybackState, PlaybackToggle};

/// External media capability: load a resource, start it, pause it, and
/// (un)register the listener that receives its events.
pub trait MediaPlayer {
    fn load(&mut self, uri: &Path);
    fn play(&mut self);
    fn pause(&mut self);

    /// Register the listener. Events sent before this call are lost.
    fn subscribe(&mut self) -> Receiver<PlayerEvent>;

    /// Drop the listener. No event is delivered after this call.
    fn unsubscribe(&mut self);
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio output available: {0}")]
    Output(String),

    #[error("nothing loaded")]
    NothingLoaded,

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("decode failed: {0}")]
    Decode(String),
}

#[derive(Debug)]
pub enum PlayerCommand {
    Load(PathBuf),
    Play,
    Pause,
    Subscribe(Sender<PlayerEvent>),
    Unsubscribe,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Playback actually began (acknowledges `play`).
    Started,
    /// Playback is paused (acknowledges `pause`).
    Paused,
    /// End of media reached.
    Ended,
    /// `play` was issued but nothing is playing.
    StartFailed(String),
}

/// Command side of the engine thread.
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

impl MediaPlayer for PlaybackController {
    fn load(&mut self, uri: &Path) {
        self.send(PlayerCommand::Load(uri.to_path_buf()));
    }

    fn play(&mut self) {
        self.send(PlayerCommand::Play);
    }

    fn pause(&mut self) {
        self.send(PlayerCommand::Pause);
    }

    fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();
        self.send(PlayerCommand::Subscribe(event_tx));
        event_rx
    }

    fn unsubscribe(&mut self) {
        self.send(PlayerCommand::Unsubscribe);
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.send(PlayerCommand::Shutdown);
    }
}

/// Spawns the playback thread and returns its controller.
///
/// The audio device is opened lazily on the first `play`, so a machine
/// without sound still boots; it just reports `StartFailed`.
pub fn start_playback() -> PlaybackController {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();

    thread::spawn(move || {
        let mut engine = PlaybackEngine::new();
        engine.run(command_rx);
    });

    PlaybackController { command_tx }
}
