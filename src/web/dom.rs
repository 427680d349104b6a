//! Element lookups for the player markup rendered by `PlayerView`.
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement, HtmlVideoElement, Window};

use crate::error::PlayerError;
use crate::settings::PlayerSettings;

pub const CONTAINER_ID: &str = "player-container";
pub const VIDEO_ID: &str = "video-player";
pub const OVERLAY_ID: &str = "controls-overlay";
pub const FILE_INPUT_ID: &str = "file-input";
pub const FILE_NAME_ID: &str = "file-name";
pub const PLAY_PAUSE_BTN_ID: &str = "play-pause-btn";
pub const PLAY_PAUSE_ICON_ID: &str = "play-pause-icon";
pub const REWIND_BTN_ID: &str = "rewind-btn";
pub const FORWARD_BTN_ID: &str = "forward-btn";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const TIME_DISPLAY_ID: &str = "time-display";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";
pub const VOLUME_ICON_ID: &str = "volume-icon";
pub const MUTE_BTN_ID: &str = "mute-btn";
pub const LOOP_BTN_ID: &str = "loop-btn";
pub const SHUFFLE_BTN_ID: &str = "shuffle-btn";
pub const ROTATION_BTN_ID: &str = "rotation-btn";
pub const FULLSCREEN_BTN_ID: &str = "fullscreen-btn";
pub const SPEED_BTN_ID: &str = "speed-btn";
pub const SPEED_MENU_ID: &str = "speed-menu";

const SETTINGS_ATTR: &str = "data-player-settings";

/// The handful of elements the bindings hold on to directly.
#[derive(Clone)]
pub struct PlayerDom {
    pub window: Window,
    pub document: Document,
    pub container: HtmlElement,
    pub video: HtmlVideoElement,
    pub overlay: HtmlElement,
    pub speed_menu: Element,
}

impl PlayerDom {
    pub fn locate() -> Result<Self, PlayerError> {
        let window = window().ok_or_else(|| PlayerError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PlayerError::MissingElement("document".into()))?;
        Ok(Self {
            container: by_id(&document, CONTAINER_ID)?,
            video: by_id(&document, VIDEO_ID)?,
            overlay: by_id(&document, OVERLAY_ID)?,
            speed_menu: by_id(&document, SPEED_MENU_ID)?,
            window,
            document,
        })
    }

    pub fn element(&self, id: &str) -> Result<Element, PlayerError> {
        by_id(&self.document, id)
    }

    pub fn input(&self, id: &str) -> Result<HtmlInputElement, PlayerError> {
        by_id(&self.document, id)
    }

    /// Settings from the container's data attribute; defaults when absent or
    /// unreadable.
    pub fn settings(&self) -> PlayerSettings {
        let Some(raw) = self.container.get_attribute(SETTINGS_ATTR) else {
            return PlayerSettings::default();
        };
        PlayerSettings::from_json(&raw).unwrap_or_else(|err| {
            warn!(%err, "falling back to default player settings");
            PlayerSettings::default()
        })
    }
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PlayerError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| PlayerError::MissingElement(id.to_string()))
}

/// Slider position as a fraction of its `max` attribute.
pub fn slider_fraction(input: &HtmlInputElement) -> f64 {
    let value = input.value().parse::<f64>().unwrap_or(f64::NAN);
    value / slider_max(input)
}

pub fn slider_max(input: &HtmlInputElement) -> f64 {
    input
        .max()
        .parse::<f64>()
        .ok()
        .filter(|max| max.is_finite() && *max > 0.0)
        .unwrap_or(1.0)
}
