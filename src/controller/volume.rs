use tracing::debug;

use super::engine::{PlaybackEngine, PlaybackState};
use super::host::Host;
use super::surface::{ControlSurface, DisplayUpdate, Glyph, GlyphSlot, ValueSlot};
use super::PlaybackUIController;

/// Icon for a given effective volume.
pub fn volume_glyph(effective_volume: f64) -> Glyph {
    if effective_volume <= 0.0 {
        Glyph::VolumeSilent
    } else if effective_volume <= 0.5 {
        Glyph::VolumeLow
    } else {
        Glyph::VolumeHigh
    }
}

impl<E, S, H> PlaybackUIController<E, S, H>
where
    E: PlaybackEngine,
    S: ControlSurface,
    H: Host,
{
    /// Slider drag. Raising the volume above zero also unmutes.
    pub fn set_volume_from_slider(&mut self, value: f64) {
        if value.is_nan() {
            debug!("ignoring unparsable volume slider value");
            return;
        }
        let volume = value.clamp(0.0, 1.0);
        self.engine.set_volume(volume);
        if volume > 0.0 {
            self.engine.set_muted(false);
        }
        self.refresh_volume_glyph();
    }

    /// Mute button. Only the mute flag changes, so unmuting brings back the
    /// exact level that was playing before.
    pub fn toggle_mute(&mut self) {
        if self.engine.is_muted() {
            self.engine.set_muted(false);
            let restored = self.engine.volume();
            self.show_volume_slider(restored);
        } else {
            self.engine.set_muted(true);
            self.show_volume_slider(0.0);
        }
        self.refresh_volume_glyph();
    }

    /// Volume icon. Assigns the level directly: silent goes to full, anything
    /// audible goes to zero.
    pub fn toggle_mute_via_icon(&mut self) {
        if self.effective_volume() == 0.0 {
            self.engine.set_volume(1.0);
            self.engine.set_muted(false);
            self.show_volume_slider(1.0);
        } else {
            self.engine.set_volume(0.0);
            self.show_volume_slider(0.0);
        }
        self.refresh_volume_glyph();
    }

    pub fn effective_volume(&self) -> f64 {
        PlaybackState::capture(&self.engine).effective_volume()
    }

    pub(super) fn refresh_volume_glyph(&mut self) {
        let glyph = volume_glyph(self.effective_volume());
        self.surface.apply(DisplayUpdate::Glyph {
            slot: GlyphSlot::Volume,
            glyph,
        });
    }

    fn show_volume_slider(&mut self, value: f64) {
        self.surface.apply(DisplayUpdate::Value {
            slot: ValueSlot::Volume,
            value,
        });
    }
}
