//! The playback primitive the controller drives. It owns decoding, timing and
//! the authoritative transport flags; the controller only reads and commands it.

use crate::error::PlayerError;

/// A media source handed to the engine, e.g. an object URL for a picked file.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub url: String,
    pub name: String,
}

impl MediaSource {
    /// Page-owned `blob:` URLs must be revoked once the engine lets go of them.
    pub fn is_object_url(&self) -> bool {
        self.url.starts_with("blob:")
    }
}

/// Freshness token for a play command. The engine reports the asynchronous
/// outcome back with the same token so stale outcomes can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayAttempt(pub(crate) u64);

impl PlayAttempt {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Result of a play command once the host has accepted or refused it.
pub type PlayOutcome = Result<(), PlayerError>;

pub trait PlaybackEngine {
    /// Start playback. The outcome is delivered later as
    /// `ControlEvent::PlaySettled` carrying `attempt`.
    fn play(&mut self, attempt: PlayAttempt);
    fn pause(&mut self);
    fn load(&mut self, source: &MediaSource);

    fn is_paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// May be NaN before metadata is known or infinite for live streams.
    fn duration(&self) -> f64;

    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn is_muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);

    fn is_looping(&self) -> bool;
    fn set_looping(&mut self, looping: bool);
}

/// Point-in-time copy of the engine's transport state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub current_time_seconds: f64,
    pub duration_seconds: f64,
    pub is_paused: bool,
    pub volume: f64,
    pub is_muted: bool,
    pub playback_rate: f64,
    pub is_looping: bool,
}

impl PlaybackState {
    pub fn capture<E: PlaybackEngine + ?Sized>(engine: &E) -> Self {
        Self {
            current_time_seconds: engine.current_time(),
            duration_seconds: engine.duration(),
            is_paused: engine.is_paused(),
            volume: engine.volume(),
            is_muted: engine.is_muted(),
            playback_rate: engine.playback_rate(),
            is_looping: engine.is_looping(),
        }
    }

    /// What the listener actually hears: zero while muted.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }
}
