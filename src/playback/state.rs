use crate::config::StorageKeys;
use crate::error::Result;
use crate::playback::store::StateStore;

/// The two background tracks. The intro plays once, the loop repeats forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Track {
    #[default]
    Intro,
    Loop,
}

impl Track {
    /// Identifier written to storage.
    pub fn storage_id(self) -> &'static str {
        match self {
            Track::Intro => "alfa",
            Track::Loop => "beta",
        }
    }

    pub fn from_storage_id(raw: &str) -> Option<Self> {
        match raw {
            "alfa" => Some(Track::Intro),
            "beta" => Some(Track::Loop),
            _ => None,
        }
    }
}

/// Playback state persisted across page loads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Seconds into `active_track`'s own timeline.
    pub position: f64,
    pub active_track: Track,
    /// Latched once the intro has finished; never cleared.
    pub has_transitioned: bool,
}

impl PlaybackState {
    /// Read every entry, treating anything missing or malformed as its default.
    pub fn load<S: StateStore + ?Sized>(store: &S, keys: &StorageKeys) -> Result<Self> {
        let is_playing = parse_flag(store.get_item(&keys.is_playing)?);
        let position = parse_position(store.get_item(&keys.current_time)?);
        let active_track = store
            .get_item(&keys.current_track)?
            .as_deref()
            .and_then(Track::from_storage_id)
            .unwrap_or_default();
        let has_transitioned = parse_flag(store.get_item(&keys.has_transitioned)?);

        Ok(Self {
            is_playing,
            position,
            active_track,
            has_transitioned,
        }
        .normalized())
    }

    pub fn save<S: StateStore + ?Sized>(&self, store: &S, keys: &StorageKeys) -> Result<()> {
        let state = self.clone().normalized();
        store.set_item(&keys.is_playing, bool_str(state.is_playing))?;
        store.set_item(&keys.current_time, &state.position.to_string())?;
        store.set_item(&keys.current_track, state.active_track.storage_id())?;
        store.set_item(&keys.has_transitioned, bool_str(state.has_transitioned))?;
        Ok(())
    }

    /// Track to resume on page load.
    pub fn resume_track(&self) -> Track {
        if self.active_track == Track::Intro && !self.has_transitioned {
            Track::Intro
        } else {
            Track::Loop
        }
    }

    /// Enforce the one-way intro -> loop transition and a finite, non-negative position.
    pub fn normalized(mut self) -> Self {
        if self.has_transitioned {
            self.active_track = Track::Loop;
        }
        self.position = sanitize_position(self.position);
        self
    }
}

pub(crate) fn sanitize_position(position: f64) -> f64 {
    if position.is_finite() && position > 0.0 {
        position
    } else {
        0.0
    }
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.as_deref() == Some("true")
}

fn parse_position(raw: Option<String>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .map(sanitize_position)
        .unwrap_or(0.0)
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::store::MemoryStore;

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::default();
        let state = PlaybackState::load(&store, &StorageKeys::default()).unwrap();
        assert_eq!(state, PlaybackState::default());
        assert_eq!(state.active_track, Track::Intro);
        assert_eq!(state.resume_track(), Track::Intro);
    }

    #[test]
    fn reads_raw_string_entries() {
        let store = MemoryStore::from_pairs([
            ("audioIsPlaying", "true"),
            ("audioCurrentTime", "42.5"),
            ("currentAudioFile", "beta"),
            ("hasTransitionedToBeta", "true"),
        ]);
        let state = PlaybackState::load(&store, &StorageKeys::default()).unwrap();
        assert!(state.is_playing);
        assert_eq!(state.position, 42.5);
        assert_eq!(state.active_track, Track::Loop);
        assert!(state.has_transitioned);
    }

    #[test]
    fn latched_intro_is_read_as_loop() {
        let store = MemoryStore::from_pairs([
            ("currentAudioFile", "alfa"),
            ("hasTransitionedToBeta", "true"),
            ("audioCurrentTime", "7"),
        ]);
        let state = PlaybackState::load(&store, &StorageKeys::default()).unwrap();
        assert_eq!(state.active_track, Track::Loop);
        assert_eq!(state.resume_track(), Track::Loop);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let store = MemoryStore::from_pairs([
            ("audioIsPlaying", "yes"),
            ("audioCurrentTime", "soon"),
            ("currentAudioFile", "gamma"),
        ]);
        let state = PlaybackState::load(&store, &StorageKeys::default()).unwrap();
        assert_eq!(state, PlaybackState::default());

        for raw in ["-3", "NaN", "inf"] {
            let store = MemoryStore::from_pairs([("audioCurrentTime", raw)]);
            let state = PlaybackState::load(&store, &StorageKeys::default()).unwrap();
            assert_eq!(state.position, 0.0, "{raw}");
        }
    }

    #[test]
    fn save_writes_the_wire_format() {
        let store = MemoryStore::default();
        let keys = StorageKeys::default();
        PlaybackState {
            is_playing: true,
            position: 42.0,
            active_track: Track::Loop,
            has_transitioned: true,
        }
        .save(&store, &keys)
        .unwrap();

        assert_eq!(store.get("audioIsPlaying").as_deref(), Some("true"));
        assert_eq!(store.get("audioCurrentTime").as_deref(), Some("42"));
        assert_eq!(store.get("currentAudioFile").as_deref(), Some("beta"));
        assert_eq!(store.get("hasTransitionedToBeta").as_deref(), Some("true"));
    }

    #[test]
    fn save_never_writes_intro_after_the_latch() {
        let store = MemoryStore::default();
        let keys = StorageKeys::default();
        PlaybackState {
            active_track: Track::Intro,
            has_transitioned: true,
            ..PlaybackState::default()
        }
        .save(&store, &keys)
        .unwrap();
        assert_eq!(store.get("currentAudioFile").as_deref(), Some("beta"));
    }
}
