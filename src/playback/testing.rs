//! In-memory media handles and storage that record what the controller does.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::FutureExt;

use crate::config::StorageKeys;
use crate::error::{Result, SiteError};
use crate::playback::controller::{PlayAttempt, PlaybackController, Settled};
use crate::playback::media::{MediaHandle, PlayFuture};
use crate::playback::state::Track;
use crate::playback::store::{MemoryStore, StateStore};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Seek(Track, f64),
    Play(Track),
    Pause(Track),
    Write(String, String),
}

pub type Log = Rc<RefCell<Vec<Op>>>;

pub struct FakeMedia {
    track: Track,
    log: Log,
    paused: Cell<bool>,
    time: Cell<f64>,
    rejection: Cell<Option<&'static str>>,
}

impl FakeMedia {
    pub fn new(track: Track, log: Log) -> Self {
        Self {
            track,
            log,
            paused: Cell::new(true),
            time: Cell::new(0.0),
            rejection: Cell::new(None),
        }
    }

    /// Reject the next `play()` with a DOMException of this name.
    pub fn fail_next_play(&self, name: &'static str) {
        self.rejection.set(Some(name));
    }

    pub fn advance(&self, seconds: f64) {
        self.time.set(self.time.get() + seconds);
    }

    /// Natural end of a non-looping track.
    pub fn finish(&self) {
        self.paused.set(true);
    }

    /// Paused by something other than the controller (browser media keys, OS).
    pub fn external_pause(&self) {
        self.paused.set(true);
    }
}

impl MediaHandle for FakeMedia {
    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn seek(&self, seconds: f64) {
        self.log.borrow_mut().push(Op::Seek(self.track, seconds));
        self.time.set(seconds);
    }

    fn play(&self) -> PlayFuture {
        self.log.borrow_mut().push(Op::Play(self.track));
        let outcome = match self.rejection.take() {
            Some(name) => Err(SiteError::from_rejection_name(name, name)),
            None => {
                self.paused.set(false);
                Ok(())
            }
        };
        futures_util::future::ready(outcome).boxed_local()
    }

    fn pause(&self) {
        self.log.borrow_mut().push(Op::Pause(self.track));
        self.paused.set(true);
    }
}

pub struct RecordingStore {
    inner: MemoryStore,
    log: Log,
    failing: bool,
}

impl RecordingStore {
    pub fn fail_all(&mut self) {
        self.failing = true;
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }
}

impl StateStore for RecordingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.failing {
            return Err(SiteError::StorageUnavailable("denied".to_string()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.failing {
            return Err(SiteError::StorageUnavailable("denied".to_string()));
        }
        self.log
            .borrow_mut()
            .push(Op::Write(key.to_string(), value.to_string()));
        self.inner.set_item(key, value)
    }
}

pub fn harness(pairs: &[(&str, &str)]) -> (PlaybackController<FakeMedia, RecordingStore>, Log) {
    let log: Log = Rc::default();
    let store = RecordingStore {
        inner: MemoryStore::from_pairs(pairs.iter().copied()),
        log: log.clone(),
        failing: false,
    };
    let ctrl = PlaybackController::new(
        FakeMedia::new(Track::Intro, log.clone()),
        FakeMedia::new(Track::Loop, log.clone()),
        store,
        StorageKeys::default(),
    );
    (ctrl, log)
}

/// Resolve a fake play request and report it back to the controller.
pub fn settle(
    ctrl: &mut PlaybackController<FakeMedia, RecordingStore>,
    attempt: PlayAttempt,
) -> Settled {
    let PlayAttempt { ticket, request } = attempt;
    let outcome = request
        .now_or_never()
        .expect("fake play requests settle immediately");
    ctrl.settle(ticket, outcome)
}
