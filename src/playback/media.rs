use futures_util::future::LocalBoxFuture;

use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::error::SiteError;
#[cfg(target_arch = "wasm32")]
use futures_util::FutureExt;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Settles once the media element has started playing or refused to.
pub type PlayFuture = LocalBoxFuture<'static, Result<()>>;

/// One playable audio track.
pub trait MediaHandle {
    fn paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn seek(&self, seconds: f64);
    fn play(&self) -> PlayFuture;
    fn pause(&self);
}

/// An `<audio>` element appended to the document body.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct AudioTrack {
    element: HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl AudioTrack {
    /// Reuse the element with `id` if the page already has one, otherwise create it.
    pub fn get_or_create(id: &str, src: &str, looping: bool) -> Result<Self> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| SiteError::Dom("document is not available".to_string()))?;

        let element = match document.get_element_by_id(id) {
            Some(existing) => existing
                .dyn_into::<HtmlAudioElement>()
                .map_err(|_| SiteError::Dom(format!("#{id} is not an <audio> element")))?,
            None => {
                let audio: HtmlAudioElement = document
                    .create_element("audio")
                    .map_err(SiteError::dom)?
                    .dyn_into()
                    .map_err(|_| SiteError::Dom("created element is not <audio>".to_string()))?;
                audio.set_id(id);
                audio.set_attribute("preload", "auto").map_err(SiteError::dom)?;
                audio.set_src(src);
                document
                    .body()
                    .ok_or_else(|| SiteError::Dom("document has no body".to_string()))?
                    .append_child(&audio)
                    .map_err(SiteError::dom)?;
                audio
            }
        };
        element.set_loop(looping);

        Ok(Self { element })
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaHandle for AudioTrack {
    fn paused(&self) -> bool {
        self.element.paused()
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn seek(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn play(&self) -> PlayFuture {
        match self.element.play() {
            Ok(promise) => async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| SiteError::from_play_rejection(&err))
            }
            .boxed_local(),
            Err(err) => futures_util::future::ready(Err(SiteError::from_play_rejection(&err)))
                .boxed_local(),
        }
    }

    fn pause(&self) {
        if let Err(err) = self.element.pause() {
            dioxus::logger::tracing::warn!("pause failed: {err:?}");
        }
    }
}
