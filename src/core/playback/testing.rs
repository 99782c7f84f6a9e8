//! Test double for `MediaPlayer`: records every call and lets the test
//! play the engine's role on the listener channel.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use super::{MediaPlayer, PlayerEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Subscribe,
    Unsubscribe,
    Dropped,
}

#[derive(Default)]
struct Shared {
    calls: Vec<Call>,
    listener: Option<Sender<PlayerEvent>>,
}

pub(crate) struct RecordingPlayer {
    shared: Rc<RefCell<Shared>>,
}

/// The test's view into a `RecordingPlayer` after it was boxed away.
#[derive(Clone)]
pub(crate) struct Probe {
    shared: Rc<RefCell<Shared>>,
}

impl RecordingPlayer {
    pub(crate) fn new() -> (Self, Probe) {
        let shared = Rc::new(RefCell::new(Shared::default()));
        (
            Self {
                shared: Rc::clone(&shared),
            },
            Probe { shared },
        )
    }

    fn record(&self, call: Call) {
        self.shared.borrow_mut().calls.push(call);
    }
}

impl MediaPlayer for RecordingPlayer {
    fn load(&mut self, uri: &Path) {
        self.record(Call::Load(uri.to_path_buf()));
    }

    fn play(&mut self) {
        self.record(Call::Play);
    }

    fn pause(&mut self) {
        self.record(Call::Pause);
    }

    fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = mpsc::channel();
        let mut shared = self.shared.borrow_mut();
        shared.calls.push(Call::Subscribe);
        shared.listener = Some(tx);
        rx
    }

    fn unsubscribe(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.calls.push(Call::Unsubscribe);
        shared.listener = None;
    }
}

impl Drop for RecordingPlayer {
    fn drop(&mut self) {
        self.record(Call::Dropped);
    }
}

impl Probe {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.shared.borrow().calls.clone()
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.shared.borrow().calls.iter().filter(|c| *c == call).count()
    }

    pub(crate) fn clear(&self) {
        self.shared.borrow_mut().calls.clear();
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.shared.borrow().listener.is_some()
    }

    /// Send an event the way the engine would. False when nobody listens.
    pub(crate) fn emit(&self, event: PlayerEvent) -> bool {
        match &self.shared.borrow().listener {
            Some(tx) => tx.send(event).is_ok(),
            None => false,
        }
    }
}
