use thiserror::Error;

use crate::controller::FullscreenTarget;

/// Errors surfaced by the player controller and its browser bindings.
///
/// Most of these are recovered where they occur and only end up in the log;
/// settings parsing and binding attachment are the two places that return them.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("playback start was rejected: {0}")]
    PlayRejected(String),
    #[error("playback rate {0} is not one of 0.5, 1, 1.5, 2")]
    UnsupportedRate(f64),
    #[error("fullscreen is not available on the {0:?} surface")]
    FullscreenUnavailable(FullscreenTarget),
    #[error("fullscreen request on the {target:?} surface failed: {reason}")]
    Fullscreen {
        target: FullscreenTarget,
        reason: String,
    },
    #[error("invalid player settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
    #[error("setting `{field}` is out of range: {value}")]
    SettingOutOfRange { field: &'static str, value: f64 },
    #[error("required element `#{0}` is missing from the page")]
    MissingElement(String),
}
