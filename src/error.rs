/// Result alias that carries the crate's [`SiteError`].
pub type Result<T> = std::result::Result<T, SiteError>;

/// Everything that can go wrong while wiring the site's client-side behavior.
///
/// None of these are fatal to the page: callers log them and fall back to a
/// degraded mode (paused audio, in-memory state, default config).
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The browser refused to start playback without a prior user gesture.
    #[error("autoplay rejected: {0}")]
    AutoplayRejected(String),
    /// The media resource is missing, unsupported or failed to load.
    #[error("media unavailable: {0}")]
    MediaUnavailable(String),
    /// Local storage is disabled or threw on access.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// The embedded site configuration is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom error: {0}")]
    Dom(String),
}

impl SiteError {
    /// Play rejections the user can fix by interacting with the page.
    pub fn is_autoplay_block(&self) -> bool {
        matches!(self, Self::AutoplayRejected(_))
    }

    /// Classify a rejected `HTMLMediaElement.play()` promise by its DOMException name.
    #[cfg(target_arch = "wasm32")]
    pub fn from_play_rejection(value: &wasm_bindgen::JsValue) -> Self {
        let name = js_sys::Reflect::get(value, &"name".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let message = js_sys::Reflect::get(value, &"message".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| name.clone());
        Self::from_rejection_name(&name, message)
    }

    pub fn from_rejection_name(name: &str, message: impl Into<String>) -> Self {
        match name {
            "NotAllowedError" => Self::AutoplayRejected(message.into()),
            _ => Self::MediaUnavailable(message.into()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn storage(value: wasm_bindgen::JsValue) -> Self {
        Self::StorageUnavailable(js_message(&value))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn dom(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(js_message(&value))
    }
}

#[cfg(target_arch = "wasm32")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_allowed_is_an_autoplay_block() {
        let err = SiteError::from_rejection_name("NotAllowedError", "play() needs a gesture");
        assert!(err.is_autoplay_block());
        assert_eq!(err.to_string(), "autoplay rejected: play() needs a gesture");
    }

    #[test]
    fn other_rejections_mean_the_media_is_unavailable() {
        let err = SiteError::from_rejection_name("NotSupportedError", "no supported source");
        assert!(!err.is_autoplay_block());
        assert!(matches!(err, SiteError::MediaUnavailable(_)));
    }
}
