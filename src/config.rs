use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
#[cfg(target_arch = "wasm32")]
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Site configuration. Every field has a default, so an embedded override
/// only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub audio: AudioConfig,
    pub effects: EffectsConfig,
}

/// Background music settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub intro_src: String,
    pub loop_src: String,
    pub keys: StorageKeys,
    pub notice_timeout_ms: u32,
    pub notice_fade_ms: u32,
    pub resync_interval_ms: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            intro_src: "/multimedia/alfa.mp3".to_string(),
            loop_src: "/multimedia/beta.mp3".to_string(),
            keys: StorageKeys::default(),
            notice_timeout_ms: 10_000,
            notice_fade_ms: 500,
            resync_interval_ms: 1_000,
        }
    }
}

/// Local-storage key names for the persisted playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub is_playing: String,
    pub current_time: String,
    pub current_track: String,
    pub has_transitioned: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            is_playing: "audioIsPlaying".to_string(),
            current_time: "audioCurrentTime".to_string(),
            current_track: "currentAudioFile".to_string(),
            has_transitioned: "hasTransitionedToBeta".to_string(),
        }
    }
}

/// Timings and thresholds for the page effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub navbar_scroll_threshold: f64,
    pub fade_threshold: f64,
    pub fade_root_margin: String,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_threshold: f64,
    pub default_parallax_speed: f64,
    pub form_success_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 100.0,
            fade_threshold: 0.1,
            fade_root_margin: "0px 0px -50px 0px".to_string(),
            counter_duration_ms: 2_000,
            counter_tick_ms: 16,
            counter_threshold: 0.5,
            default_parallax_speed: 0.5,
            form_success_ms: 3_000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the embedded override from the host page, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw.filter(|text| !text.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                dioxus::logger::tracing::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_storage_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.is_playing, "audioIsPlaying");
        assert_eq!(keys.current_time, "audioCurrentTime");
        assert_eq!(keys.current_track, "currentAudioFile");
        assert_eq!(keys.has_transitioned, "hasTransitionedToBeta");
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "audio": { "intro_src": "/media/intro.ogg" }, "effects": { "counter_tick_ms": 20 } }"#,
        )
        .unwrap();

        assert_eq!(config.audio.intro_src, "/media/intro.ogg");
        assert_eq!(config.audio.loop_src, "/multimedia/beta.mp3");
        assert_eq!(config.audio.notice_timeout_ms, 10_000);
        assert_eq!(config.effects.counter_tick_ms, 20);
        assert_eq!(config.effects.counter_duration_ms, 2_000);
    }

    #[test]
    fn malformed_override_is_an_error() {
        let err = SiteConfig::from_json("{ audio: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
