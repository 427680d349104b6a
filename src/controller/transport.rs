//! Play/pause, seeking, rate, loop and the progress readout.

use tracing::{debug, info};

use super::engine::{MediaSource, PlayAttempt, PlayOutcome, PlaybackEngine, PlaybackState};
use super::format::{progress_fraction, progress_label};
use super::host::Host;
use super::surface::{
    ControlSurface, CssFlag, DisplayUpdate, FlagTarget, Glyph, GlyphSlot, TextSlot, ValueSlot,
};
use super::PlaybackUIController;
use crate::error::PlayerError;

/// The rates offered in the speed menu. Anything else is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackRate {
    Half,
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 4] = [
        PlaybackRate::Half,
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    pub fn as_f64(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }
}

impl TryFrom<f64> for PlaybackRate {
    type Error = PlayerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PlaybackRate::ALL
            .into_iter()
            .find(|rate| rate.as_f64() == value)
            .ok_or(PlayerError::UnsupportedRate(value))
    }
}

impl<E, S, H> PlaybackUIController<E, S, H>
where
    E: PlaybackEngine,
    S: ControlSurface,
    H: Host,
{
    /// Issue play or pause depending on the engine's paused flag. The glyph
    /// follows the command that was issued.
    pub fn toggle_play_pause(&mut self) {
        if self.engine.is_paused() {
            let attempt = self.next_attempt();
            self.engine.play(attempt);
            self.show_play_glyph(Glyph::Playing);
        } else {
            self.next_attempt();
            self.engine.pause();
            self.show_play_glyph(Glyph::Paused);
        }
    }

    /// Load a new source and try to autoplay it. The glyph is settled by the
    /// outcome of the play attempt, not here.
    pub fn load_source(&mut self, source: MediaSource) {
        info!(name = %source.name, "loading media source");
        self.engine.load(&source);
        self.surface.apply(DisplayUpdate::Text {
            slot: TextSlot::FileName,
            text: source.name.clone(),
        });
        if let Some(previous) = self.source.replace(source) {
            debug!(previous = %previous.name, "replaced media source");
        }
        let attempt = self.next_attempt();
        self.engine.play(attempt);
    }

    pub(super) fn on_play_settled(&mut self, attempt: PlayAttempt, outcome: PlayOutcome) {
        if attempt.0 != self.transport_epoch {
            debug!(attempt = attempt.id(), "ignoring stale play outcome");
            return;
        }
        match outcome {
            Ok(()) => self.sync_play_glyph(),
            Err(err) => {
                debug!(%err, "play attempt rejected, showing paused state");
                self.show_play_glyph(Glyph::Paused);
            }
        }
    }

    /// Re-derive the play/pause glyph from the engine.
    pub(super) fn sync_play_glyph(&mut self) {
        let glyph = if PlaybackState::capture(&self.engine).is_paused {
            Glyph::Paused
        } else {
            Glyph::Playing
        };
        self.show_play_glyph(glyph);
    }

    /// Clamping to the media bounds is left to the engine.
    pub fn seek_relative(&mut self, delta_seconds: f64) {
        let target = self.engine.current_time() + delta_seconds;
        self.engine.set_current_time(target);
    }

    pub fn seek_absolute_fraction(&mut self, fraction: f64) {
        let target = fraction.clamp(0.0, 1.0) * self.engine.duration();
        if !target.is_finite() {
            debug!(fraction, "skipping seek, duration unknown");
            return;
        }
        self.engine.set_current_time(target);
    }

    /// Apply an allowed rate, mark it in the speed menu and close the menu.
    /// Other values are rejected without touching any state.
    pub fn set_playback_rate(&mut self, rate: f64) -> Result<(), PlayerError> {
        let rate = PlaybackRate::try_from(rate)?;
        self.session.selected_rate = rate;
        self.engine.set_playback_rate(rate.as_f64());
        self.mark_selected_rate();
        self.close_speed_menu();
        Ok(())
    }

    /// Click on a speed menu entry. A rejected rate still closes the menu.
    pub(super) fn select_speed_option(&mut self, rate: f64) {
        if let Err(err) = self.set_playback_rate(rate) {
            debug!(%err, "ignoring speed option");
            self.close_speed_menu();
        }
    }

    pub(super) fn mark_selected_rate(&mut self) {
        let selected = self.session.selected_rate;
        for rate in PlaybackRate::ALL {
            self.surface.apply(DisplayUpdate::Flag {
                target: FlagTarget::SpeedOption(rate),
                flag: CssFlag::Selected,
                on: rate == selected,
            });
        }
    }

    /// The indicator tracks the engine's flag after the flip.
    pub fn toggle_loop(&mut self) {
        let looping = !self.engine.is_looping();
        self.engine.set_looping(looping);
        self.show_loop_flag();
    }

    pub(super) fn show_loop_flag(&mut self) {
        self.surface.apply(DisplayUpdate::Flag {
            target: FlagTarget::Loop,
            flag: CssFlag::Active,
            on: PlaybackState::capture(&self.engine).is_looping,
        });
    }

    /// Refresh the progress bar and time label. Left untouched while the
    /// duration is unknown.
    pub(super) fn on_time_update(&mut self) {
        let state = PlaybackState::capture(&self.engine);
        let (current, duration) = (state.current_time_seconds, state.duration_seconds);
        let Some(fraction) = progress_fraction(current, duration) else {
            return;
        };
        self.surface.apply(DisplayUpdate::Value {
            slot: ValueSlot::Progress,
            value: fraction,
        });
        self.surface.apply(DisplayUpdate::Text {
            slot: TextSlot::Time,
            text: progress_label(current, duration),
        });
    }

    fn next_attempt(&mut self) -> PlayAttempt {
        self.transport_epoch += 1;
        PlayAttempt(self.transport_epoch)
    }

    fn show_play_glyph(&mut self, glyph: Glyph) {
        self.surface.apply(DisplayUpdate::Glyph {
            slot: GlyphSlot::PlayPause,
            glyph,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::{
        clip, controller, controller_with_settings, playing_controller,
    };
    use crate::controller::ControlEvent;

    #[test]
    fn toggle_flips_engine_and_glyph() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::TogglePlayPause);
        assert!(!ctl.engine().paused);
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Playing));
        ctl.dispatch(ControlEvent::TogglePlayPause);
        assert!(ctl.engine().paused);
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Paused));
    }

    #[test]
    fn autoplay_success_shows_playing() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::LoadSource(clip()));
        assert_eq!(ctl.surface().text(TextSlot::FileName), Some("clip.mp4".to_string()));
        let attempt = ctl.engine().last_attempt.unwrap();
        ctl.dispatch(ControlEvent::PlaySettled {
            attempt,
            outcome: Ok(()),
        });
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Playing));
    }

    #[test]
    fn rejected_autoplay_shows_paused() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::LoadSource(clip()));
        let attempt = ctl.engine().last_attempt.unwrap();
        // The host refused, so the element never left the paused state.
        ctl.engine_mut().paused = true;
        ctl.dispatch(ControlEvent::PlaySettled {
            attempt,
            outcome: Err(PlayerError::PlayRejected("NotAllowedError".into())),
        });
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Paused));
    }

    #[test]
    fn user_pause_before_autoplay_settles_wins() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::LoadSource(clip()));
        let attempt = ctl.engine().last_attempt.unwrap();
        ctl.dispatch(ControlEvent::TogglePlayPause);
        assert!(ctl.engine().paused);

        ctl.dispatch(ControlEvent::PlaySettled {
            attempt,
            outcome: Ok(()),
        });
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Paused));

        ctl.dispatch(ControlEvent::PlaySettled {
            attempt,
            outcome: Err(PlayerError::PlayRejected("AbortError".into())),
        });
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Paused));
    }

    #[test]
    fn fresh_success_reads_actual_paused_flag() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::LoadSource(clip()));
        let attempt = ctl.engine().last_attempt.unwrap();
        // Paused through the element's own controls; no toggle went through us.
        ctl.engine_mut().paused = true;
        ctl.dispatch(ControlEvent::PlaySettled {
            attempt,
            outcome: Ok(()),
        });
        assert_eq!(ctl.surface().glyph(GlyphSlot::PlayPause), Some(Glyph::Paused));
    }

    #[test]
    fn relative_seek_is_unclamped() {
        let mut ctl = playing_controller();
        ctl.engine_mut().current_time = 4.0;
        ctl.dispatch(ControlEvent::Rewind);
        assert_eq!(ctl.engine().current_time, -6.0);
        ctl.dispatch(ControlEvent::Forward);
        ctl.dispatch(ControlEvent::Forward);
        assert_eq!(ctl.engine().current_time, 14.0);
    }

    #[test]
    fn configured_seek_step_drives_rewind_and_forward() {
        let mut ctl = controller_with_settings(r#"{"seek_step_secs": 5}"#);
        ctl.engine_mut().current_time = 20.0;
        ctl.dispatch(ControlEvent::Rewind);
        assert_eq!(ctl.engine().current_time, 15.0);
        ctl.dispatch(ControlEvent::Forward);
        ctl.dispatch(ControlEvent::Forward);
        assert_eq!(ctl.engine().current_time, 25.0);
    }

    #[test]
    fn fractional_seek_needs_a_duration() {
        let mut ctl = playing_controller();
        ctl.engine_mut().duration = 200.0;
        ctl.dispatch(ControlEvent::SeekToFraction(0.25));
        assert_eq!(ctl.engine().current_time, 50.0);

        ctl.engine_mut().duration = f64::NAN;
        ctl.dispatch(ControlEvent::SeekToFraction(0.75));
        assert_eq!(ctl.engine().current_time, 50.0);
    }

    #[test]
    fn unsupported_rate_changes_nothing() {
        let mut ctl = controller();
        let before = ctl.surface().updates.len();
        assert!(matches!(
            ctl.set_playback_rate(0.75),
            Err(PlayerError::UnsupportedRate(rate)) if rate == 0.75
        ));
        assert_eq!(ctl.engine().rate, 1.0);
        assert_eq!(ctl.session().selected_rate, PlaybackRate::Normal);
        assert_eq!(ctl.surface().updates.len(), before);
    }

    #[test]
    fn selecting_a_rate_marks_exactly_one_option() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::ToggleSpeedMenu);
        ctl.dispatch(ControlEvent::SelectSpeed(2.0));
        assert_eq!(ctl.engine().rate, 2.0);
        assert_eq!(ctl.surface().selected_rates(), vec![PlaybackRate::Double]);
        assert!(!ctl.session().speed_menu_open);
    }

    #[test]
    fn selecting_a_rate_closes_the_menu_once() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::ToggleSpeedMenu);
        let before = ctl.surface().updates.len();
        ctl.dispatch(ControlEvent::SelectSpeed(1.5));
        let closes = ctl.surface().updates[before..]
            .iter()
            .filter(|update| {
                matches!(
                    update,
                    DisplayUpdate::Flag {
                        target: FlagTarget::SpeedMenu,
                        on: false,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(closes, 1);
    }

    #[test]
    fn unparsable_option_still_closes_menu() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::ToggleSpeedMenu);
        ctl.dispatch(ControlEvent::SelectSpeed(f64::NAN));
        assert_eq!(ctl.engine().rate, 1.0);
        assert!(!ctl.session().speed_menu_open);
    }

    #[test]
    fn loop_indicator_tracks_engine() {
        let mut ctl = controller();
        ctl.dispatch(ControlEvent::ToggleLoop);
        assert!(ctl.engine().looping);
        assert_eq!(ctl.surface().flag(FlagTarget::Loop), Some(true));
        ctl.engine_mut().looping = false;
        ctl.dispatch(ControlEvent::ToggleLoop);
        assert!(ctl.engine().looping);
        assert_eq!(ctl.surface().flag(FlagTarget::Loop), Some(true));
    }

    #[test]
    fn progress_updates_with_known_duration() {
        let mut ctl = playing_controller();
        ctl.engine_mut().current_time = 65.0;
        ctl.engine_mut().duration = 260.0;
        ctl.dispatch(ControlEvent::TimeUpdate);
        assert_eq!(ctl.surface().value(ValueSlot::Progress), Some(0.25));
        assert_eq!(ctl.surface().text(TextSlot::Time), Some("01:05 / 04:20".to_string()));
    }

    #[test]
    fn progress_is_left_alone_with_invalid_duration() {
        let mut ctl = playing_controller();
        ctl.engine_mut().current_time = 30.0;
        ctl.engine_mut().duration = 120.0;
        ctl.dispatch(ControlEvent::TimeUpdate);
        let before = ctl.surface().updates.len();

        for duration in [0.0, -4.0, f64::NAN] {
            ctl.engine_mut().duration = duration;
            ctl.engine_mut().current_time = 90.0;
            ctl.dispatch(ControlEvent::TimeUpdate);
        }
        assert_eq!(ctl.surface().updates.len(), before);
        assert_eq!(ctl.surface().value(ValueSlot::Progress), Some(0.25));
        assert_eq!(ctl.surface().text(TextSlot::Time), Some("00:30 / 02:00".to_string()));
    }
}
