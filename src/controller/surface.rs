//! Widget side of the controller: which widgets exist, which single event each
//! one listens for, and the one-way display writes the controller sends back.

use super::engine::MediaSource;
use super::transport::PlaybackRate;
use super::ControlEvent;

/// Every widget the controller is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    FileInput,
    PlayPause,
    Rewind,
    Forward,
    Progress,
    VolumeSlider,
    MuteButton,
    VolumeIcon,
    Loop,
    Shuffle,
    Rotation,
    Fullscreen,
    SpeedTrigger,
    SpeedOptions,
    /// Page-level click that landed outside the speed menu and its trigger.
    OutsideSpeedMenu,
    /// The video surface and the overlay above it.
    PlayerSurface,
}

/// The kind of event a widget emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Activated,
    ValueChanged,
    PointerMoved,
    SourceChosen,
}

/// Payload delivered by a widget subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSignal {
    Activated,
    /// Numeric value of the widget. Sliders report fractions in `[0, 1]`,
    /// speed options report their rate. NaN when the value did not parse.
    Value(f64),
    PointerMoved,
    Source(MediaSource),
}

impl ControlId {
    pub const ALL: [ControlId; 16] = [
        ControlId::FileInput,
        ControlId::PlayPause,
        ControlId::Rewind,
        ControlId::Forward,
        ControlId::Progress,
        ControlId::VolumeSlider,
        ControlId::MuteButton,
        ControlId::VolumeIcon,
        ControlId::Loop,
        ControlId::Shuffle,
        ControlId::Rotation,
        ControlId::Fullscreen,
        ControlId::SpeedTrigger,
        ControlId::SpeedOptions,
        ControlId::OutsideSpeedMenu,
        ControlId::PlayerSurface,
    ];

    /// The single event kind this widget subscribes to.
    pub fn event_kind(self) -> EventKind {
        match self {
            ControlId::FileInput => EventKind::SourceChosen,
            ControlId::Progress | ControlId::VolumeSlider | ControlId::SpeedOptions => {
                EventKind::ValueChanged
            }
            ControlId::PlayerSurface => EventKind::PointerMoved,
            _ => EventKind::Activated,
        }
    }

    /// Map a widget signal to the controller event it stands for. Signals that
    /// do not match the widget's event kind are dropped.
    pub fn translate(self, signal: WidgetSignal) -> Option<ControlEvent> {
        let event = match (self, signal) {
            (ControlId::FileInput, WidgetSignal::Source(source)) => ControlEvent::LoadSource(source),
            (ControlId::PlayPause, WidgetSignal::Activated) => ControlEvent::TogglePlayPause,
            (ControlId::Rewind, WidgetSignal::Activated) => ControlEvent::Rewind,
            (ControlId::Forward, WidgetSignal::Activated) => ControlEvent::Forward,
            (ControlId::Progress, WidgetSignal::Value(v)) => ControlEvent::SeekToFraction(v),
            (ControlId::VolumeSlider, WidgetSignal::Value(v)) => ControlEvent::SetVolume(v),
            (ControlId::MuteButton, WidgetSignal::Activated) => ControlEvent::ToggleMute,
            (ControlId::VolumeIcon, WidgetSignal::Activated) => ControlEvent::ToggleMuteViaIcon,
            (ControlId::Loop, WidgetSignal::Activated) => ControlEvent::ToggleLoop,
            (ControlId::Shuffle, WidgetSignal::Activated) => ControlEvent::ToggleShuffle,
            (ControlId::Rotation, WidgetSignal::Activated) => ControlEvent::Rotate,
            (ControlId::Fullscreen, WidgetSignal::Activated) => ControlEvent::ToggleFullscreen,
            (ControlId::SpeedTrigger, WidgetSignal::Activated) => ControlEvent::ToggleSpeedMenu,
            (ControlId::SpeedOptions, WidgetSignal::Value(v)) => ControlEvent::SelectSpeed(v),
            (ControlId::OutsideSpeedMenu, WidgetSignal::Activated) => ControlEvent::OutsideClick,
            (ControlId::PlayerSurface, WidgetSignal::PointerMoved) => ControlEvent::PointerMoved,
            _ => return None,
        };
        Some(event)
    }
}

/// Icon glyphs, rendered as Material Symbols ligatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Shown while media plays (a pause affordance).
    Playing,
    /// Shown while media is paused (a play affordance).
    Paused,
    VolumeSilent,
    VolumeLow,
    VolumeHigh,
}

impl Glyph {
    pub fn ligature(self) -> &'static str {
        match self {
            Glyph::Playing => "pause",
            Glyph::Paused => "play_arrow",
            Glyph::VolumeSilent => "volume_off",
            Glyph::VolumeLow => "volume_down",
            Glyph::VolumeHigh => "volume_up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSlot {
    PlayPause,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSlot {
    /// Fraction in `[0, 1]`.
    Progress,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Time,
    FileName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagTarget {
    Loop,
    Shuffle,
    SpeedMenu,
    SpeedOption(PlaybackRate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssFlag {
    Active,
    Selected,
}

impl CssFlag {
    pub fn class_name(self) -> &'static str {
        match self {
            CssFlag::Active => "active",
            CssFlag::Selected => "selected",
        }
    }
}

/// A discrete write to the widget set. There is no read-back except
/// [`ControlSurface::read_value`] at init.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    Glyph { slot: GlyphSlot, glyph: Glyph },
    Value { slot: ValueSlot, value: f64 },
    Text { slot: TextSlot, text: String },
    Flag { target: FlagTarget, flag: CssFlag, on: bool },
    OverlayOpacity(f64),
    Rotation { degrees: u16, transition_secs: f64 },
}

pub trait ControlSurface {
    fn apply(&mut self, update: DisplayUpdate);

    /// Current value of a slider as the page rendered it, if it parses.
    fn read_value(&self, slot: ValueSlot) -> Option<f64>;
}
