//! Per-session UI state and the cosmetic affordances that only touch it:
//! the speed menu disclosure, rotation, shuffle and fullscreen.

use tracing::{debug, info};

use super::engine::PlaybackEngine;
use super::host::{FullscreenTarget, Host};
use super::surface::{ControlSurface, CssFlag, DisplayUpdate, FlagTarget};
use super::transport::PlaybackRate;
use super::visibility::ControlsVisibility;
use super::PlaybackUIController;

/// Quarter-turn rotation of the player container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationStep(u8);

impl RotationStep {
    #[cfg(test)]
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    pub fn degrees(self) -> u16 {
        u16::from(self.0) * 90
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UISessionState {
    pub rotation: RotationStep,
    /// Cosmetic only, there is no playlist to reorder.
    pub shuffle_enabled: bool,
    pub speed_menu_open: bool,
    pub selected_rate: PlaybackRate,
    pub controls: ControlsVisibility,
}

impl Default for UISessionState {
    fn default() -> Self {
        Self {
            rotation: RotationStep::default(),
            shuffle_enabled: false,
            speed_menu_open: false,
            selected_rate: PlaybackRate::Normal,
            controls: ControlsVisibility::default(),
        }
    }
}

impl<E, S, H> PlaybackUIController<E, S, H>
where
    E: PlaybackEngine,
    S: ControlSurface,
    H: Host,
{
    pub fn toggle_speed_menu(&mut self) {
        self.set_speed_menu_open(!self.session.speed_menu_open);
    }

    pub fn close_speed_menu(&mut self) {
        if self.session.speed_menu_open {
            self.set_speed_menu_open(false);
        }
    }

    fn set_speed_menu_open(&mut self, open: bool) {
        self.session.speed_menu_open = open;
        self.surface.apply(DisplayUpdate::Flag {
            target: FlagTarget::SpeedMenu,
            flag: CssFlag::Active,
            on: open,
        });
    }

    pub fn rotate(&mut self) {
        self.session.rotation = self.session.rotation.next();
        self.surface.apply(DisplayUpdate::Rotation {
            degrees: self.session.rotation.degrees(),
            transition_secs: self.settings.rotation_transition_secs,
        });
    }

    pub fn toggle_shuffle(&mut self) {
        let enabled = !self.session.shuffle_enabled;
        self.session.shuffle_enabled = enabled;
        self.surface.apply(DisplayUpdate::Flag {
            target: FlagTarget::Shuffle,
            flag: CssFlag::Active,
            on: enabled,
        });
        let message = if enabled {
            "Shuffle enabled"
        } else {
            "Shuffle disabled"
        };
        self.host.notify(message);
    }

    /// Exit if something is already fullscreen, otherwise walk the fallback
    /// chain until one surface accepts. Total failure is a silent no-op.
    pub fn toggle_fullscreen(&mut self) {
        if self.host.fullscreen_active() {
            self.host.exit_fullscreen();
            return;
        }
        for target in FullscreenTarget::FALLBACK_CHAIN {
            match self.host.request_fullscreen(target) {
                Ok(()) => {
                    info!(?target, "entered fullscreen");
                    return;
                }
                Err(err) => debug!(%err, "fullscreen attempt failed, trying next surface"),
            }
        }
        debug!("fullscreen unavailable on every surface");
    }
}
