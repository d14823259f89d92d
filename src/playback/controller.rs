use dioxus::logger::tracing::{debug, info, warn};

use crate::config::StorageKeys;
use crate::error::Result;
use crate::playback::media::{MediaHandle, PlayFuture};
use crate::playback::notice::{AudioNotice, NoticeView};
use crate::playback::state::{sanitize_position, PlaybackState, Track};
use crate::playback::store::StateStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Initialized,
    Disposed,
}

/// Why a play request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayReason {
    Autoplay,
    Toggle,
    Notice,
    Transition,
}

/// Identifies a pending play request when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket {
    pub track: Track,
    pub reason: PlayReason,
}

/// A play request that has been issued but not yet settled.
///
/// The caller awaits `request` and hands the outcome back to
/// [`PlaybackController::settle`], so the controller is never borrowed across an await.
pub struct PlayAttempt {
    pub ticket: PlayTicket,
    pub request: PlayFuture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Playing,
    /// Playback did not start; the notice is showing with this generation.
    Blocked { notice: u64 },
    /// The controller was disposed before the request settled.
    Ignored,
}

/// Icon on the floating toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleIcon {
    Sound,
    #[default]
    Muted,
}

/// Keeps one background stream going across page loads: the intro plays
/// once, then the loop track takes over for good.
pub struct PlaybackController<M, S> {
    intro: M,
    looping: M,
    store: S,
    keys: StorageKeys,
    state: PlaybackState,
    notice: AudioNotice,
    phase: Phase,
    storage_warned: bool,
}

impl<M: MediaHandle, S: StateStore> PlaybackController<M, S> {
    /// `looping` must already be configured to repeat on its own.
    pub fn new(intro: M, looping: M, store: S, keys: StorageKeys) -> Self {
        Self {
            intro,
            looping,
            store,
            keys,
            state: PlaybackState::default(),
            notice: AudioNotice::default(),
            phase: Phase::Created,
            storage_warned: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn notice(&self) -> NoticeView {
        self.notice.view()
    }

    pub fn handle(&self, track: Track) -> &M {
        match track {
            Track::Intro => &self.intro,
            Track::Loop => &self.looping,
        }
    }

    /// Restore the stored state and attempt to resume. Only the first call does anything.
    pub fn initialize(&mut self) -> Option<PlayAttempt> {
        if self.phase != Phase::Created {
            return None;
        }
        self.phase = Phase::Initialized;

        self.state = match PlaybackState::load(&self.store, &self.keys) {
            Ok(state) => state,
            Err(err) => {
                warn!("{err}; starting from the intro");
                self.storage_warned = true;
                PlaybackState::default()
            }
        };
        let track = self.state.resume_track();
        self.state.active_track = track;
        debug!(
            "resuming {:?} at {:.2}s (transitioned: {})",
            track, self.state.position, self.state.has_transitioned
        );

        Some(self.start(track, PlayReason::Autoplay))
    }

    /// Record the outcome of a play request issued by this controller.
    pub fn settle(&mut self, ticket: PlayTicket, outcome: Result<()>) -> Settled {
        if self.phase != Phase::Initialized {
            return Settled::Ignored;
        }

        match outcome {
            Ok(()) => {
                self.notice.dismiss();
                if ticket.track == self.state.active_track {
                    let handle = self.handle(ticket.track);
                    self.state.position = sanitize_position(handle.current_time());
                    self.state.is_playing = true;
                    self.write_state();
                }
                Settled::Playing
            }
            Err(err) => {
                if err.is_autoplay_block() {
                    info!("autoplay blocked ({err}); asking the visitor to enable audio");
                } else {
                    warn!("{:?} track could not start: {err}", ticket.track);
                }
                self.state.is_playing = false;
                self.write_state();
                Settled::Blocked {
                    notice: self.notice.show(),
                }
            }
        }
    }

    /// Floating button: pause the active track if it is audible, resume it otherwise.
    pub fn toggle(&mut self) -> Option<PlayAttempt> {
        if self.phase != Phase::Initialized {
            return None;
        }

        let track = self.state.active_track;
        let handle = self.handle(track);
        if handle.paused() {
            self.state.is_playing = true;
            self.write_state();
            Some(self.start(track, PlayReason::Toggle))
        } else {
            handle.pause();
            self.state.position = sanitize_position(handle.current_time());
            self.state.is_playing = false;
            self.write_state();
            None
        }
    }

    /// The notice's "enable audio" button.
    pub fn enable_from_notice(&mut self) -> Option<PlayAttempt> {
        if self.phase != Phase::Initialized {
            return None;
        }
        self.notice.dismiss();
        let track = self.state.resume_track();
        self.state.active_track = track;
        Some(self.start(track, PlayReason::Notice))
    }

    /// The intro reached its natural end. Switches to the loop exactly once.
    pub fn on_intro_ended(&mut self) -> Option<PlayAttempt> {
        if self.phase != Phase::Initialized || self.state.has_transitioned {
            return None;
        }

        self.state.has_transitioned = true;
        self.state.active_track = Track::Loop;
        self.state.position = 0.0;
        self.write_state();
        info!("intro finished, switching to the loop track");

        Some(self.start(Track::Loop, PlayReason::Transition))
    }

    /// Snapshot the active track into storage. Called on play, pause,
    /// progress ticks and page unload.
    pub fn persist(&mut self) {
        if self.phase != Phase::Initialized {
            return;
        }
        let (time, paused) = {
            let handle = self.handle(self.state.active_track);
            (handle.current_time(), handle.paused())
        };
        self.state.position = sanitize_position(time);
        self.state.is_playing = !paused;
        self.write_state();
    }

    pub fn icon(&self) -> ToggleIcon {
        if self.phase == Phase::Initialized && !self.handle(self.state.active_track).paused() {
            ToggleIcon::Sound
        } else {
            ToggleIcon::Muted
        }
    }

    pub fn expire_notice(&mut self, generation: u64) -> bool {
        self.notice.expire(generation)
    }

    pub fn finish_notice_fade(&mut self, generation: u64) -> bool {
        self.notice.finish_fade(generation)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss();
    }

    /// Save a last snapshot, silence both tracks and ignore everything afterwards.
    pub fn dispose(&mut self) {
        if self.phase == Phase::Initialized {
            self.persist();
            self.intro.pause();
            self.looping.pause();
        }
        self.notice.dismiss();
        self.phase = Phase::Disposed;
        debug!("playback controller disposed");
    }

    fn start(&self, track: Track, reason: PlayReason) -> PlayAttempt {
        let handle = self.handle(track);
        handle.seek(self.state.position);
        PlayAttempt {
            ticket: PlayTicket { track, reason },
            request: handle.play(),
        }
    }

    fn write_state(&mut self) {
        self.state = std::mem::take(&mut self.state).normalized();
        match self.state.save(&self.store, &self.keys) {
            Ok(()) => self.storage_warned = false,
            Err(err) => {
                if !self.storage_warned {
                    warn!("could not persist playback state: {err}");
                    self.storage_warned = true;
                }
            }
        }
    }
}


#[cfg(test)]
impl<M, S> PlaybackController<M, S> {
    pub(crate) fn store_ref(&self) -> &S {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
