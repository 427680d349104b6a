//! Auto-hide for the on-screen controls.
//!
//! The overlay is either visible or hidden. Pointer movement (and playback
//! starting) shows it and arms one inactivity timer; the timer hides it only
//! while media is playing. At most one timer is outstanding and a fire from a
//! superseded timer is ignored.

use tracing::debug;

use super::engine::PlaybackEngine;
use super::host::{Host, TimerHandle};
use super::surface::{ControlSurface, DisplayUpdate};
use super::PlaybackUIController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsVisibility {
    visible: bool,
    pending: Option<TimerHandle>,
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            pending: None,
        }
    }
}

#[cfg(test)]
impl ControlsVisibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }
}

impl<E, S, H> PlaybackUIController<E, S, H>
where
    E: PlaybackEngine,
    S: ControlSurface,
    H: Host,
{
    /// Show the controls and restart the inactivity clock.
    pub fn reveal_controls(&mut self) {
        self.cancel_hide_timer();
        self.set_controls_visible(true);
        let handle = self.host.schedule_hide(self.settings.hide_delay_ms);
        self.session.controls.pending = Some(handle);
    }

    /// Show the controls and leave them up; used while paused.
    pub fn pin_controls(&mut self) {
        self.cancel_hide_timer();
        self.set_controls_visible(true);
    }

    pub(super) fn on_hide_timer(&mut self, handle: TimerHandle) {
        if self.session.controls.pending != Some(handle) {
            debug!(timer = handle.0, "ignoring superseded hide timer");
            return;
        }
        self.session.controls.pending = None;
        if self.engine.is_paused() {
            return;
        }
        self.set_controls_visible(false);
    }

    pub(super) fn cancel_hide_timer(&mut self) {
        if let Some(handle) = self.session.controls.pending.take() {
            self.host.cancel_hide(handle);
        }
    }

    fn set_controls_visible(&mut self, visible: bool) {
        if self.session.controls.visible == visible {
            return;
        }
        self.session.controls.visible = visible;
        let opacity = if visible { 1.0 } else { 0.0 };
        self.surface.apply(DisplayUpdate::OverlayOpacity(opacity));
    }
}
