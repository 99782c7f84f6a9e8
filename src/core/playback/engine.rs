//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (opened on first play, must stay alive)
//! - Sink (for the loaded sample)
//! - the completion listener
//! - command loop + periodic end-of-media checks
//!
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::{PlaybackError, PlayerCommand, PlayerEvent};

const TICK_MS: u64 = 200;

#[derive(Default)]
pub struct PlaybackEngine {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    source_path: Option<PathBuf>,
    listener: Option<Sender<PlayerEvent>>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        'run: loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            break 'run;
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
        tracing::debug!("playback engine stopped");
    }

    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Load(path) => {
                self.stop_internal();
                tracing::debug!(path = %path.display(), "sample loaded");
                self.source_path = Some(path);
            }
            PlayerCommand::Play => match self.play() {
                Ok(()) => self.emit(PlayerEvent::Started),
                Err(e) => {
                    tracing::warn!("playback failed to start: {e}");
                    self.emit(PlayerEvent::StartFailed(e.to_string()));
                }
            },
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    self.emit(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Subscribe(tx) => self.listener = Some(tx),
            PlayerCommand::Unsubscribe => self.listener = None,
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn emit(&self, event: PlayerEvent) {
        if let Some(tx) = &self.listener {
            let _ = tx.send(event);
        }
    }

    fn tick(&mut self) {
        let finished = self
            .sink
            .as_ref()
            .is_some_and(|sink| !sink.is_paused() && sink.empty());

        if finished {
            // Next play starts from the top again.
            self.sink = None;
            self.emit(PlayerEvent::Ended);
        }
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if let Some(sink) = &self.sink {
            if !sink.empty() {
                sink.play();
                return Ok(());
            }
        }

        let path = self
            .source_path
            .clone()
            .ok_or(PlaybackError::NothingLoaded)?;
        let source = open_sample(&path)?;

        let sink = Sink::connect_new(self.output()?.mixer());
        sink.append(source);
        sink.play();
        self.sink = Some(sink);

        Ok(())
    }

    fn output(&mut self) -> Result<&OutputStream, PlaybackError> {
        if self.stream.is_none() {
            // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| PlaybackError::Output(e.to_string()))?;
            stream.log_on_drop(false);
            tracing::info!("audio output opened");
            self.stream = Some(stream);
        }

        self.stream
            .as_ref()
            .ok_or_else(|| PlaybackError::Output("stream vanished".into()))
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Open and probe the sample. Runs before the output device is touched, so a
/// bad file is reported the same way on machines with or without sound.
fn open_sample(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::mpsc;

    use super::*;
    use tempfile::tempdir;

    fn subscribed() -> (PlaybackEngine, Receiver<PlayerEvent>) {
        let mut engine = PlaybackEngine::new();
        let (tx, rx) = mpsc::channel();
        assert!(!engine.handle_command(PlayerCommand::Subscribe(tx)));
        (engine, rx)
    }

    fn events(rx: &Receiver<PlayerEvent>) -> Vec<PlayerEvent> {
        rx.try_iter().collect()
    }

    fn start_failure(events: &[PlayerEvent]) -> &str {
        match events {
            [PlayerEvent::StartFailed(reason)] => reason,
            other => panic!("expected a single StartFailed, got {other:?}"),
        }
    }

    #[test]
    fn play_with_nothing_loaded_fails_to_start() {
        let (mut engine, rx) = subscribed();

        engine.handle_command(PlayerCommand::Play);

        assert_eq!(start_failure(&events(&rx)), "nothing loaded");
    }

    #[test]
    fn play_on_a_missing_file_reports_the_open_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.mp3");
        let (mut engine, rx) = subscribed();

        engine.handle_command(PlayerCommand::Load(path));
        engine.handle_command(PlayerCommand::Play);

        let events = events(&rx);
        let reason = start_failure(&events);
        assert!(reason.starts_with("failed to open"), "{reason}");
        assert!(reason.contains("missing.mp3"), "{reason}");
    }

    #[test]
    fn undecodable_file_fails_to_start_instead_of_ending() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sample.mp3");
        fs::write(&path, b"this is not audio").expect("write");
        let (mut engine, rx) = subscribed();

        engine.handle_command(PlayerCommand::Load(path));
        engine.handle_command(PlayerCommand::Play);
        engine.tick();

        let events = events(&rx);
        let reason = start_failure(&events);
        assert!(reason.starts_with("decode failed"), "{reason}");
        assert!(engine.sink.is_none());
    }

    #[test]
    fn pause_without_a_sink_is_silent() {
        let (mut engine, rx) = subscribed();

        engine.handle_command(PlayerCommand::Pause);
        engine.tick();

        assert!(events(&rx).is_empty());
    }

    #[test]
    fn nothing_is_emitted_after_unsubscribe() {
        let (mut engine, rx) = subscribed();

        engine.handle_command(PlayerCommand::Unsubscribe);
        engine.handle_command(PlayerCommand::Play);
        engine.emit(PlayerEvent::Ended);

        assert!(events(&rx).is_empty());
    }

    #[test]
    fn shutdown_ends_the_loop_even_mid_batch() {
        let (tx, rx) = mpsc::channel();
        tx.send(PlayerCommand::Pause).expect("send");
        tx.send(PlayerCommand::Shutdown).expect("send");
        tx.send(PlayerCommand::Play).expect("send");

        // Returns instead of blocking: the sender is still alive.
        PlaybackEngine::new().run(rx);
        drop(tx);
    }

    #[test]
    fn disconnected_commands_end_the_loop() {
        let (tx, rx) = mpsc::channel::<PlayerCommand>();
        drop(tx);

        PlaybackEngine::new().run(rx);
    }
}
