//! In-memory stand-ins for the engine, the widget set and the host page.

use super::engine::PlaybackState;
use super::session::UISessionState;
use super::surface::{CssFlag, Glyph};
use super::{
    ControlEvent, ControlSurface, DisplayUpdate, FlagTarget, FullscreenTarget, GlyphSlot, Host,
    MediaSource, PlayAttempt, PlaybackEngine, PlaybackRate, PlaybackUIController, TextSlot,
    TimerHandle, ValueSlot,
};
use crate::error::PlayerError;
use crate::settings::PlayerSettings;

#[derive(Debug)]
pub struct FakeEngine {
    pub paused: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub rate: f64,
    pub looping: bool,
    pub last_attempt: Option<PlayAttempt>,
    pub loaded: Option<String>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            muted: false,
            rate: 1.0,
            looping: false,
            last_attempt: None,
            loaded: None,
        }
    }
}

impl PlaybackEngine for FakeEngine {
    fn play(&mut self, attempt: PlayAttempt) {
        self.paused = false;
        self.last_attempt = Some(attempt);
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn load(&mut self, source: &MediaSource) {
        self.loaded = Some(source.url.clone());
        self.current_time = 0.0;
        self.duration = f64::NAN;
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub slider: Option<f64>,
    pub updates: Vec<DisplayUpdate>,
}

impl ControlSurface for RecordingSurface {
    fn apply(&mut self, update: DisplayUpdate) {
        self.updates.push(update);
    }

    fn read_value(&self, slot: ValueSlot) -> Option<f64> {
        match slot {
            ValueSlot::Volume => self.slider,
            ValueSlot::Progress => Some(0.0),
        }
    }
}

impl RecordingSurface {
    pub fn glyph(&self, slot: GlyphSlot) -> Option<Glyph> {
        self.updates.iter().rev().find_map(|update| match update {
            DisplayUpdate::Glyph { slot: s, glyph } if *s == slot => Some(*glyph),
            _ => None,
        })
    }

    pub fn value(&self, slot: ValueSlot) -> Option<f64> {
        self.updates.iter().rev().find_map(|update| match update {
            DisplayUpdate::Value { slot: s, value } if *s == slot => Some(*value),
            _ => None,
        })
    }

    pub fn text(&self, slot: TextSlot) -> Option<String> {
        self.updates.iter().rev().find_map(|update| match update {
            DisplayUpdate::Text { slot: s, text } if *s == slot => Some(text.clone()),
            _ => None,
        })
    }

    pub fn flag(&self, target: FlagTarget) -> Option<bool> {
        self.updates.iter().rev().find_map(|update| match update {
            DisplayUpdate::Flag { target: t, on, .. } if *t == target => Some(*on),
            _ => None,
        })
    }

    pub fn selected_rates(&self) -> Vec<PlaybackRate> {
        PlaybackRate::ALL
            .into_iter()
            .filter(|rate| {
                self.updates.iter().rev().find_map(|update| match update {
                    DisplayUpdate::Flag {
                        target: FlagTarget::SpeedOption(r),
                        flag: CssFlag::Selected,
                        on,
                    } if r == rate => Some(*on),
                    _ => None,
                }) == Some(true)
            })
            .collect()
    }

    pub fn last_opacity(&self) -> Option<f64> {
        self.updates.iter().rev().find_map(|update| match update {
            DisplayUpdate::OverlayOpacity(opacity) => Some(*opacity),
            _ => None,
        })
    }

    pub fn last_rotation(&self) -> Option<DisplayUpdate> {
        self.updates
            .iter()
            .rev()
            .find(|update| matches!(update, DisplayUpdate::Rotation { .. }))
            .cloned()
    }
}

/// Host with a manual millisecond clock.
#[derive(Debug)]
pub struct FakeHost {
    pub now_ms: u64,
    pub timers: Vec<(TimerHandle, u64)>,
    next_timer: u64,
    pub notices: Vec<String>,
    pub fullscreen_support: Vec<FullscreenTarget>,
    pub fullscreen: Option<FullscreenTarget>,
    pub fullscreen_requests: Vec<FullscreenTarget>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            now_ms: 0,
            timers: Vec::new(),
            next_timer: 0,
            notices: Vec::new(),
            fullscreen_support: FullscreenTarget::FALLBACK_CHAIN.to_vec(),
            fullscreen: None,
            fullscreen_requests: Vec::new(),
        }
    }
}

impl FakeHost {
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Remove and return the earliest timer due at or before `until`, moving
    /// the clock to its deadline.
    fn pop_due(&mut self, until: u64) -> Option<TimerHandle> {
        let (index, &(handle, due)) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (_, due))| *due <= until)
            .min_by_key(|(_, (_, due))| *due)?;
        self.timers.remove(index);
        self.now_ms = due;
        Some(handle)
    }
}

impl Host for FakeHost {
    fn schedule_hide(&mut self, delay_ms: u32) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        self.timers.push((handle, self.now_ms + u64::from(delay_ms)));
        handle
    }

    fn cancel_hide(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }

    fn fullscreen_active(&self) -> bool {
        self.fullscreen.is_some()
    }

    fn request_fullscreen(&mut self, target: FullscreenTarget) -> Result<(), PlayerError> {
        self.fullscreen_requests.push(target);
        if self.fullscreen_support.contains(&target) {
            self.fullscreen = Some(target);
            Ok(())
        } else {
            Err(PlayerError::FullscreenUnavailable(target))
        }
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

pub type TestController = PlaybackUIController<FakeEngine, RecordingSurface, FakeHost>;

impl TestController {
    pub fn engine(&self) -> &FakeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut FakeEngine {
        &mut self.engine
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut FakeHost {
        &mut self.host
    }

    pub fn session(&self) -> &UISessionState {
        &self.session
    }

    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState::capture(&self.engine)
    }

    /// Move the fake clock forward, firing due hide timers in order.
    pub fn advance(&mut self, ms: u64) {
        let until = self.host.now_ms + ms;
        while let Some(handle) = self.host.pop_due(until) {
            self.dispatch(ControlEvent::HideTimerFired(handle));
        }
        self.host.now_ms = until;
    }
}

fn build(slider: Option<f64>, settings: PlayerSettings) -> TestController {
    let surface = RecordingSurface {
        slider,
        ..RecordingSurface::default()
    };
    let mut ctl =
        PlaybackUIController::new(FakeEngine::default(), surface, FakeHost::default(), settings);
    ctl.init();
    ctl
}

pub fn controller_with_slider(slider: Option<f64>) -> TestController {
    build(slider, PlayerSettings::default())
}

/// Full-volume controller built from a `data-player-settings` style payload.
pub fn controller_with_settings(json: &str) -> TestController {
    let settings = PlayerSettings::from_json(json).expect("valid test settings");
    build(Some(1.0), settings)
}

pub fn controller() -> TestController {
    controller_with_slider(Some(1.0))
}

/// Controller whose engine is already playing.
pub fn playing_controller() -> TestController {
    let mut ctl = controller();
    ctl.engine_mut().paused = false;
    ctl
}

pub fn clip() -> MediaSource {
    MediaSource {
        url: "blob:clip".into(),
        name: "clip.mp4".into(),
    }
}
