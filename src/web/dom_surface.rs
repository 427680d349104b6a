use tracing::debug;
use web_sys::{Element, HtmlElement};

use super::dom::{self, PlayerDom};
use crate::controller::{ControlSurface, DisplayUpdate, FlagTarget, GlyphSlot, TextSlot, ValueSlot};

/// Writes display updates straight into the player markup.
pub struct DomSurface {
    dom: PlayerDom,
}

impl DomSurface {
    pub fn new(dom: PlayerDom) -> Self {
        Self { dom }
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.dom.element(id) {
            Ok(el) => el.set_text_content(Some(text)),
            Err(err) => debug!(%err, "text target missing"),
        }
    }

    fn set_slider(&self, id: &str, fraction: f64) {
        match self.dom.input(id) {
            Ok(input) => {
                let value = fraction * dom::slider_max(&input);
                input.set_value(&value.to_string());
            }
            Err(err) => debug!(%err, "slider missing"),
        }
    }

    fn flag_element(&self, target: FlagTarget) -> Option<Element> {
        match target {
            FlagTarget::Loop => self.dom.element(dom::LOOP_BTN_ID).ok(),
            FlagTarget::Shuffle => self.dom.element(dom::SHUFFLE_BTN_ID).ok(),
            FlagTarget::SpeedMenu => Some(self.dom.speed_menu.clone()),
            FlagTarget::SpeedOption(rate) => {
                let selector = format!(".speed-option[data-speed=\"{}\"]", rate.as_f64());
                self.dom.speed_menu.query_selector(&selector).ok().flatten()
            }
        }
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        if el.style().set_property(property, value).is_err() {
            debug!(property, "style write rejected");
        }
    }
}

fn glyph_target(slot: GlyphSlot) -> &'static str {
    match slot {
        GlyphSlot::PlayPause => dom::PLAY_PAUSE_ICON_ID,
        GlyphSlot::Volume => dom::VOLUME_ICON_ID,
    }
}

fn slider_target(slot: ValueSlot) -> &'static str {
    match slot {
        ValueSlot::Progress => dom::PROGRESS_BAR_ID,
        ValueSlot::Volume => dom::VOLUME_SLIDER_ID,
    }
}

fn text_target(slot: TextSlot) -> &'static str {
    match slot {
        TextSlot::Time => dom::TIME_DISPLAY_ID,
        TextSlot::FileName => dom::FILE_NAME_ID,
    }
}

impl ControlSurface for DomSurface {
    fn apply(&mut self, update: DisplayUpdate) {
        match update {
            DisplayUpdate::Glyph { slot, glyph } => self.set_text(glyph_target(slot), glyph.ligature()),
            DisplayUpdate::Value { slot, value } => self.set_slider(slider_target(slot), value),
            DisplayUpdate::Text { slot, text } => self.set_text(text_target(slot), &text),
            DisplayUpdate::Flag { target, flag, on } => {
                let Some(el) = self.flag_element(target) else {
                    debug!(?target, "flag target missing");
                    return;
                };
                let _ = el.class_list().toggle_with_force(flag.class_name(), on);
            }
            DisplayUpdate::OverlayOpacity(opacity) => {
                Self::set_style(&self.dom.overlay, "opacity", &opacity.to_string());
            }
            DisplayUpdate::Rotation {
                degrees,
                transition_secs,
            } => {
                let container = &self.dom.container;
                Self::set_style(container, "transform", &format!("rotate({degrees}deg)"));
                Self::set_style(
                    container,
                    "transition",
                    &format!("transform {transition_secs}s ease"),
                );
            }
        }
    }

    fn read_value(&self, slot: ValueSlot) -> Option<f64> {
        let input = self.dom.input(slider_target(slot)).ok()?;
        Some(dom::slider_fraction(&input)).filter(|v| !v.is_nan())
    }
}
