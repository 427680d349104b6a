use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget, HtmlInputElement, Node, Url};

use super::dom::{self, PlayerDom};
use crate::controller::{ControlId, EventKind, MediaSource, WidgetSignal};

/// A DOM listener that is removed again when dropped.
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type Extractor = Box<dyn Fn(&Event) -> Option<WidgetSignal>>;

/// One widget in the page: the DOM nodes behind a `ControlId` and how to read
/// a signal out of their events.
pub struct DomWidget {
    id: ControlId,
    dom: PlayerDom,
}

impl DomWidget {
    pub fn new(id: ControlId, dom: PlayerDom) -> Self {
        Self { id, dom }
    }

    /// Register `handler` for this widget's single event kind.
    pub fn subscribe(&self, kind: EventKind, handler: Rc<dyn Fn(WidgetSignal)>) -> Vec<Subscription> {
        debug_assert_eq!(kind, self.id.event_kind());
        let Some((targets, event, extract)) = self.listeners(kind) else {
            warn!(control = ?self.id, "widget not present in the page");
            return Vec::new();
        };
        let extract = Rc::new(extract);
        targets
            .iter()
            .map(|target| {
                let handler = handler.clone();
                let extract = extract.clone();
                Subscription::listen(target, event, move |ev: Event| {
                    if let Some(signal) = extract(&ev) {
                        handler(signal);
                    }
                })
            })
            .collect()
    }

    fn listeners(&self, kind: EventKind) -> Option<(Vec<EventTarget>, &'static str, Extractor)> {
        let page = &self.dom;
        let by_id = |id: &str| page.element(id).ok().map(EventTarget::from);

        let listener = match (self.id, kind) {
            (ControlId::FileInput, EventKind::SourceChosen) => {
                let input = page.input(dom::FILE_INPUT_ID).ok()?;
                let extract: Extractor = Box::new(|ev| chosen_file(ev).map(WidgetSignal::Source));
                (vec![EventTarget::from(input)], "change", extract)
            }
            (ControlId::Progress, EventKind::ValueChanged) => {
                (vec![by_id(dom::PROGRESS_BAR_ID)?], "input", slider_value())
            }
            (ControlId::VolumeSlider, EventKind::ValueChanged) => {
                (vec![by_id(dom::VOLUME_SLIDER_ID)?], "input", slider_value())
            }
            (ControlId::SpeedOptions, EventKind::ValueChanged) => {
                let extract: Extractor = Box::new(speed_option_value);
                (vec![EventTarget::from(page.speed_menu.clone())], "click", extract)
            }
            (ControlId::PlayerSurface, EventKind::PointerMoved) => {
                let extract: Extractor = Box::new(|_| Some(WidgetSignal::PointerMoved));
                (
                    vec![
                        EventTarget::from(page.video.clone()),
                        EventTarget::from(page.overlay.clone()),
                    ],
                    "mousemove",
                    extract,
                )
            }
            (ControlId::OutsideSpeedMenu, EventKind::Activated) => {
                let menu = Node::from(page.speed_menu.clone());
                let trigger: Option<Node> = page.element(dom::SPEED_BTN_ID).ok().map(Node::from);
                let extract: Extractor = Box::new(move |ev| {
                    let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node: &Node| node.contains(target.as_ref());
                    if inside(&menu) || trigger.as_ref().is_some_and(inside) {
                        None
                    } else {
                        Some(WidgetSignal::Activated)
                    }
                });
                (vec![EventTarget::from(page.document.clone())], "click", extract)
            }
            (id, EventKind::Activated) => {
                let button = button_id(id)?;
                let extract: Extractor = Box::new(|_| Some(WidgetSignal::Activated));
                (vec![by_id(button)?], "click", extract)
            }
            _ => return None,
        };
        Some(listener)
    }
}

fn button_id(id: ControlId) -> Option<&'static str> {
    let button = match id {
        ControlId::PlayPause => dom::PLAY_PAUSE_BTN_ID,
        ControlId::Rewind => dom::REWIND_BTN_ID,
        ControlId::Forward => dom::FORWARD_BTN_ID,
        ControlId::MuteButton => dom::MUTE_BTN_ID,
        ControlId::VolumeIcon => dom::VOLUME_ICON_ID,
        ControlId::Loop => dom::LOOP_BTN_ID,
        ControlId::Shuffle => dom::SHUFFLE_BTN_ID,
        ControlId::Rotation => dom::ROTATION_BTN_ID,
        ControlId::Fullscreen => dom::FULLSCREEN_BTN_ID,
        ControlId::SpeedTrigger => dom::SPEED_BTN_ID,
        _ => return None,
    };
    Some(button)
}

fn slider_value() -> Extractor {
    Box::new(|ev| {
        let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
        Some(WidgetSignal::Value(dom::slider_fraction(&input)))
    })
}

fn speed_option_value(ev: &Event) -> Option<WidgetSignal> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let option = target.closest(".speed-option").ok().flatten()?;
    let rate = option
        .get_attribute("data-speed")
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(f64::NAN);
    Some(WidgetSignal::Value(rate))
}

fn chosen_file(ev: &Event) -> Option<MediaSource> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    match Url::create_object_url_with_blob(&file) {
        Ok(url) => Some(MediaSource {
            url,
            name: file.name(),
        }),
        Err(err) => {
            warn!(?err, "could not create an object url for the chosen file");
            None
        }
    }
}
