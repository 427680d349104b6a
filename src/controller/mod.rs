//! Player controller - keeps the control widgets in step with the playback engine.
//!
//! Every widget event and engine notification is funnelled through
//! [`PlaybackUIController::dispatch`], which runs to completion before the next
//! event is looked at. The controller never caches transport state that the
//! engine already owns; glyphs and flags are recomputed from the engine at the
//! moment they are written.

mod engine;
mod format;
mod host;
mod session;
mod surface;
mod transport;
mod visibility;
mod volume;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{MediaSource, PlayAttempt, PlayOutcome, PlaybackEngine};
pub use host::{FullscreenTarget, Host, TimerHandle};
pub use surface::{
    ControlId, ControlSurface, DisplayUpdate, EventKind, FlagTarget, GlyphSlot, TextSlot,
    ValueSlot, WidgetSignal,
};
pub use transport::PlaybackRate;

use tracing::info;

use crate::settings::PlayerSettings;
use engine::PlaybackState;
use session::UISessionState;

/// Everything the controller reacts to.
#[derive(Debug)]
pub enum ControlEvent {
    LoadSource(MediaSource),
    TogglePlayPause,
    Rewind,
    Forward,
    /// Progress bar input, as a fraction of the duration.
    SeekToFraction(f64),
    SetVolume(f64),
    ToggleMute,
    ToggleMuteViaIcon,
    ToggleLoop,
    ToggleShuffle,
    Rotate,
    ToggleFullscreen,
    ToggleSpeedMenu,
    SelectSpeed(f64),
    OutsideClick,
    PointerMoved,
    TimeUpdate,
    EnginePlayed,
    EnginePaused,
    PlaySettled {
        attempt: PlayAttempt,
        outcome: PlayOutcome,
    },
    HideTimerFired(TimerHandle),
}

pub struct PlaybackUIController<E, S, H> {
    engine: E,
    surface: S,
    host: H,
    settings: PlayerSettings,
    session: UISessionState,
    source: Option<MediaSource>,
    /// Bumped on every explicit transport command; play outcomes stamped with
    /// an older value are stale.
    transport_epoch: u64,
}

impl<E, S, H> PlaybackUIController<E, S, H>
where
    E: PlaybackEngine,
    S: ControlSurface,
    H: Host,
{
    pub fn new(engine: E, surface: S, host: H, settings: PlayerSettings) -> Self {
        Self {
            engine,
            surface,
            host,
            settings,
            session: UISessionState::default(),
            source: None,
            transport_epoch: 0,
        }
    }

    /// Bring the widgets in line with the engine at session start. The initial
    /// volume comes from the slider as rendered, falling back to full.
    pub fn init(&mut self) {
        let volume = self
            .surface
            .read_value(ValueSlot::Volume)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.min(1.0))
            .unwrap_or(1.0);
        self.engine.set_volume(volume);
        self.refresh_volume_glyph();

        self.engine
            .set_playback_rate(self.session.selected_rate.as_f64());
        self.mark_selected_rate();
        self.show_loop_flag();
        self.sync_play_glyph();
        self.pin_controls();
        let state = PlaybackState::capture(&self.engine);
        info!(
            volume = state.volume,
            rate = state.playback_rate,
            "player controller initialised"
        );
    }

    /// Drop the pending hide timer and close any open menu.
    pub fn dispose(&mut self) {
        self.cancel_hide_timer();
        self.close_speed_menu();
        info!("player controller disposed");
    }

    pub fn dispatch(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::LoadSource(source) => self.load_source(source),
            ControlEvent::TogglePlayPause => self.toggle_play_pause(),
            ControlEvent::Rewind => self.seek_relative(-self.settings.seek_step_secs),
            ControlEvent::Forward => self.seek_relative(self.settings.seek_step_secs),
            ControlEvent::SeekToFraction(fraction) => self.seek_absolute_fraction(fraction),
            ControlEvent::SetVolume(value) => self.set_volume_from_slider(value),
            ControlEvent::ToggleMute => self.toggle_mute(),
            ControlEvent::ToggleMuteViaIcon => self.toggle_mute_via_icon(),
            ControlEvent::ToggleLoop => self.toggle_loop(),
            ControlEvent::ToggleShuffle => self.toggle_shuffle(),
            ControlEvent::Rotate => self.rotate(),
            ControlEvent::ToggleFullscreen => self.toggle_fullscreen(),
            ControlEvent::ToggleSpeedMenu => self.toggle_speed_menu(),
            ControlEvent::SelectSpeed(rate) => self.select_speed_option(rate),
            ControlEvent::OutsideClick => self.close_speed_menu(),
            ControlEvent::PointerMoved => self.reveal_controls(),
            ControlEvent::TimeUpdate => self.on_time_update(),
            ControlEvent::EnginePlayed => {
                self.sync_play_glyph();
                self.reveal_controls();
            }
            ControlEvent::EnginePaused => {
                self.sync_play_glyph();
                self.pin_controls();
            }
            ControlEvent::PlaySettled { attempt, outcome } => {
                self.on_play_settled(attempt, outcome)
            }
            ControlEvent::HideTimerFired(handle) => self.on_hide_timer(handle),
        }
    }
}
