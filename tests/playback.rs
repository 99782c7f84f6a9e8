use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use encore::core::playback::{
    AudioHandle, MediaPlayer, PlaybackState, PlaybackToggle, PlayerEvent,
};

/// Minimal stand-in for the engine: logs commands, holds the listener.
#[derive(Clone, Default)]
struct FakePlayer {
    log: Rc<RefCell<Vec<&'static str>>>,
    listener: Rc<RefCell<Option<Sender<PlayerEvent>>>>,
}

impl FakePlayer {
    fn log(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }

    fn send(&self, event: PlayerEvent) -> bool {
        match self.listener.borrow().as_ref() {
            Some(tx) => tx.send(event).is_ok(),
            None => false,
        }
    }

    fn push(&self, entry: &'static str) {
        self.log.borrow_mut().push(entry);
    }
}

impl MediaPlayer for FakePlayer {
    fn load(&mut self, _uri: &Path) {
        self.push("load");
    }

    fn play(&mut self) {
        self.push("play");
    }

    fn pause(&mut self) {
        self.push("pause");
    }

    fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = mpsc::channel();
        *self.listener.borrow_mut() = Some(tx);
        self.push("subscribe");
        rx
    }

    fn unsubscribe(&mut self) {
        *self.listener.borrow_mut() = None;
        self.push("unsubscribe");
    }
}

fn setup() -> (PlaybackToggle, FakePlayer) {
    let fake = FakePlayer::default();
    let audio = AudioHandle::acquire(Box::new(fake.clone()), Path::new("sample.mp3"));
    (PlaybackToggle::new(audio), fake)
}

#[test]
fn full_cycle() {
    let (mut toggle, fake) = setup();
    assert_eq!(fake.log(), ["load", "subscribe"]);
    assert_eq!(toggle.state(), PlaybackState::Paused);

    assert_eq!(toggle.toggle(), PlaybackState::Playing);
    assert_eq!(toggle.toggle(), PlaybackState::Paused);
    assert_eq!(toggle.toggle(), PlaybackState::Playing);
    assert_eq!(fake.log(), ["load", "subscribe", "play", "pause", "play"]);

    assert!(fake.send(PlayerEvent::Ended));
    assert_eq!(toggle.poll(), [PlayerEvent::Ended]);
    assert!(!toggle.is_playing());
}

#[test]
fn teardown_unsubscribes_first_and_silences_the_listener() {
    let (mut toggle, fake) = setup();
    toggle.toggle();

    drop(toggle);

    assert_eq!(
        fake.log(),
        ["load", "subscribe", "play", "unsubscribe", "pause"]
    );
    assert!(!fake.send(PlayerEvent::Ended));
}
