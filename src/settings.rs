use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// Tunables for the player surface. Session-only: read once at attach time,
/// never written back anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u32,
    #[serde(default = "default_seek_step_secs")]
    pub seek_step_secs: f64,
    #[serde(default = "default_rotation_transition_secs")]
    pub rotation_transition_secs: f64,
}

fn default_hide_delay_ms() -> u32 {
    3000
}

fn default_seek_step_secs() -> f64 {
    10.0
}

fn default_rotation_transition_secs() -> f64 {
    0.3
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            seek_step_secs: default_seek_step_secs(),
            rotation_transition_secs: default_rotation_transition_secs(),
        }
    }
}

impl PlayerSettings {
    /// Parse settings from a JSON object; missing fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, PlayerError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), PlayerError> {
        if self.hide_delay_ms == 0 {
            return Err(PlayerError::SettingOutOfRange {
                field: "hide_delay_ms",
                value: 0.0,
            });
        }
        if !self.seek_step_secs.is_finite() || self.seek_step_secs <= 0.0 {
            return Err(PlayerError::SettingOutOfRange {
                field: "seek_step_secs",
                value: self.seek_step_secs,
            });
        }
        if !self.rotation_transition_secs.is_finite() || self.rotation_transition_secs < 0.0 {
            return Err(PlayerError::SettingOutOfRange {
                field: "rotation_transition_secs",
                value: self.rotation_transition_secs,
            });
        }
        Ok(())
    }
}
