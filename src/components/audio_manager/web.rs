// Web binding: <audio> elements, media/unload listeners, notice timers and the icon resync.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use futures_util::StreamExt;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use super::{AudioCommand, AudioUi};
use crate::components::dom::{sleep, Listener};
use crate::config::AudioConfig;
use crate::error::Result;
use crate::playback::{
    AudioTrack, PageStore, Phase, PlayAttempt, PlaybackController, Settled,
};

const INTRO_ELEMENT_ID: &str = "birria-audio-intro";
const LOOP_ELEMENT_ID: &str = "birria-audio-loop";

type WebController = PlaybackController<AudioTrack, PageStore>;

/// Create the playback session once, route widget commands to it, and
/// dispose of it when the owning component unmounts.
pub(super) fn use_web_playback(config: AudioConfig, ui: AudioUi) {
    let session = use_hook(move || match PlaybackSession::start(config, ui) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!("background audio disabled: {err}");
            None
        }
    });

    {
        let session = session.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<AudioCommand>| {
            let session = session.clone();
            async move {
                while let Some(command) = rx.next().await {
                    if let Some(session) = session.as_ref() {
                        session.command(command);
                    }
                }
            }
        });
    }

    use_drop(move || {
        if let Some(session) = session.as_ref() {
            session.dispose();
        }
    });
}

struct PlaybackSession {
    controller: RefCell<WebController>,
    ui: AudioUi,
    config: AudioConfig,
    runtime: Rc<Runtime>,
    listeners: RefCell<Vec<Listener>>,
}

impl PlaybackSession {
    fn start(config: AudioConfig, ui: AudioUi) -> Result<Rc<Self>> {
        let intro = AudioTrack::get_or_create(INTRO_ELEMENT_ID, &config.intro_src, false)?;
        let looping = AudioTrack::get_or_create(LOOP_ELEMENT_ID, &config.loop_src, true)?;
        let controller = PlaybackController::new(
            intro.clone(),
            looping.clone(),
            PageStore::open(),
            config.keys.clone(),
        );

        let session = Rc::new(Self {
            controller: RefCell::new(controller),
            ui,
            config,
            runtime: Runtime::current(),
            listeners: RefCell::new(Vec::new()),
        });
        session.wire(&intro, &looping)?;

        let attempt = session.controller.borrow_mut().initialize();
        session.run(attempt);
        session.resync_icon();

        Ok(session)
    }

    fn wire(self: &Rc<Self>, intro: &AudioTrack, looping: &AudioTrack) -> Result<()> {
        let mut listeners = Vec::new();

        for track in [intro, looping] {
            for event in ["play", "pause", "timeupdate"] {
                let weak = Rc::downgrade(self);
                listeners.push(Listener::new(track.element(), event, move |_| {
                    with_session(&weak, |session| session.persist());
                })?);
            }
        }

        let weak = Rc::downgrade(self);
        listeners.push(Listener::new(intro.element(), "ended", move |_| {
            with_session(&weak, |session| {
                let attempt = match session.controller.try_borrow_mut() {
                    Ok(mut controller) => controller.on_intro_ended(),
                    Err(_) => None,
                };
                session.run(attempt);
            });
        })?);

        if let Some(win) = window() {
            for event in ["beforeunload", "pagehide"] {
                let weak = Rc::downgrade(self);
                listeners.push(Listener::new(&win, event, move |_| {
                    with_session(&weak, |session| session.persist());
                })?);
            }
        }

        self.listeners.borrow_mut().extend(listeners);
        Ok(())
    }

    fn command(self: &Rc<Self>, command: AudioCommand) {
        let attempt = {
            let mut controller = self.controller.borrow_mut();
            match command {
                AudioCommand::Toggle => controller.toggle(),
                AudioCommand::EnableFromNotice => controller.enable_from_notice(),
                AudioCommand::DismissNotice => {
                    controller.dismiss_notice();
                    None
                }
            }
        };
        self.run(attempt);
    }

    /// Await a play request off the controller borrow, then report back.
    fn run(self: &Rc<Self>, attempt: Option<PlayAttempt>) {
        self.sync_ui();
        let Some(PlayAttempt { ticket, request }) = attempt else {
            return;
        };

        let weak = Rc::downgrade(self);
        spawn_local(async move {
            let outcome = request.await;
            let Some(session) = weak.upgrade() else {
                return;
            };
            let settled = session.controller.borrow_mut().settle(ticket, outcome);
            if let Settled::Blocked { notice } = settled {
                session.schedule_notice_expiry(notice);
            }
            session.sync_ui();
        });
    }

    fn persist(&self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.persist();
        }
    }

    fn schedule_notice_expiry(self: &Rc<Self>, generation: u64) {
        let weak = Rc::downgrade(self);
        let timeout = self.config.notice_timeout_ms;
        let fade = self.config.notice_fade_ms;

        spawn_local(async move {
            sleep(timeout).await;
            let fading = match weak.upgrade() {
                Some(session) => {
                    let fading = session.controller.borrow_mut().expire_notice(generation);
                    session.sync_ui();
                    fading
                }
                None => false,
            };
            if !fading {
                return;
            }

            sleep(fade).await;
            if let Some(session) = weak.upgrade() {
                session.controller.borrow_mut().finish_notice_fade(generation);
                session.sync_ui();
            }
        });
    }

    /// Poll the real element state so the icon recovers from pauses the
    /// controller did not cause (media keys, OS interruptions).
    fn resync_icon(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let interval = self.config.resync_interval_ms;

        spawn_local(async move {
            loop {
                sleep(interval).await;
                let Some(session) = weak.upgrade() else {
                    break;
                };
                if session.controller.borrow().phase() == Phase::Disposed {
                    break;
                }
                session.sync_ui();
            }
        });
    }

    fn sync_ui(&self) {
        let Ok(controller) = self.controller.try_borrow() else {
            return;
        };
        let icon = controller.icon();
        let notice = controller.notice();
        drop(controller);

        let _guard = RuntimeGuard::new(self.runtime.clone());
        let mut ui = self.ui;
        if *ui.icon.peek() != icon {
            ui.icon.set(icon);
        }
        if *ui.notice.peek() != notice {
            ui.notice.set(notice);
        }
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.controller.borrow_mut().dispose();
        debug!("background audio session closed");
    }
}

fn with_session(weak: &Weak<PlaybackSession>, f: impl FnOnce(&Rc<PlaybackSession>)) {
    if let Some(session) = weak.upgrade() {
        f(&session);
    }
}
