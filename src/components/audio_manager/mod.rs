//! Audio Manager - binds the persistent playback controller to the page.
//! The controller owns all playback state; components only see the mirrored
//! notice and icon signals and talk back through [`AudioCommand`]s.

use dioxus::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use futures_util::StreamExt;

use crate::components::{AudioNoticeBanner, AudioToggleButton};
use crate::config::SiteConfig;
use crate::playback::{NoticeView, ToggleIcon};

#[cfg(target_arch = "wasm32")]
mod web;

/// What the audio widgets render, refreshed by the binding.
#[derive(Clone, Copy)]
pub struct AudioUi {
    pub notice: Signal<NoticeView>,
    pub icon: Signal<ToggleIcon>,
}

impl AudioUi {
    pub fn new() -> Self {
        Self {
            notice: Signal::new(NoticeView::Hidden),
            icon: Signal::new(ToggleIcon::Muted),
        }
    }
}

/// User actions on the audio widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Toggle,
    EnableFromNotice,
    DismissNotice,
}

/// Mounted once by the site shell. Owns the playback controller for the
/// lifetime of the app and renders the notice banner and floating toggle.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let config = use_context::<SiteConfig>();
    let ui = use_context::<AudioUi>();

    web::use_web_playback(config.audio, ui);

    rsx! {
        AudioNoticeBanner {}
        AudioToggleButton {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    let _config = use_context::<SiteConfig>();
    let _ui = use_context::<AudioUi>();

    // No media elements off the web; drain commands so the widgets still work.
    use_coroutine(|mut rx: UnboundedReceiver<AudioCommand>| async move {
        while rx.next().await.is_some() {}
    });

    rsx! {
        AudioNoticeBanner {}
        AudioToggleButton {}
    }
}
