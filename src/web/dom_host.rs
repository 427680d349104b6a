use gloo_timers::callback::Timeout;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};

use super::dom::PlayerDom;
use super::EventSink;
use crate::controller::{ControlEvent, FullscreenTarget, Host, TimerHandle};
use crate::error::PlayerError;

/// Page services: hide timer, fullscreen and alerts.
pub struct DomHost {
    dom: PlayerDom,
    sink: EventSink,
    next_timer: u64,
    pending: Option<(TimerHandle, Timeout)>,
}

impl DomHost {
    pub fn new(dom: PlayerDom, sink: EventSink) -> Self {
        Self {
            dom,
            sink,
            next_timer: 0,
            pending: None,
        }
    }

    /// Call a zero-argument method by name if the element exposes it. This
    /// covers both standard and vendor-prefixed fullscreen entry points.
    fn call_if_present(
        target: &JsValue,
        method: &str,
        surface: FullscreenTarget,
    ) -> Result<(), PlayerError> {
        let func = js_sys::Reflect::get(target, &method.into())
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .ok_or(PlayerError::FullscreenUnavailable(surface))?;
        func.call0(target)
            .map(|_| ())
            .map_err(|err| PlayerError::Fullscreen {
                target: surface,
                reason: format!("{err:?}"),
            })
    }
}

impl Host for DomHost {
    fn schedule_hide(&mut self, delay_ms: u32) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        let sink = self.sink.clone();
        let timeout = Timeout::new(delay_ms, move || {
            sink.dispatch(ControlEvent::HideTimerFired(handle));
        });
        // Replacing the previous Timeout drops and clears it.
        self.pending = Some((handle, timeout));
        handle
    }

    fn cancel_hide(&mut self, handle: TimerHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }

    fn fullscreen_active(&self) -> bool {
        self.dom.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&mut self, target: FullscreenTarget) -> Result<(), PlayerError> {
        match target {
            FullscreenTarget::Container => {
                Self::call_if_present(&self.dom.container, "requestFullscreen", target)
            }
            FullscreenTarget::PrefixedContainer => {
                Self::call_if_present(&self.dom.container, "webkitRequestFullscreen", target)
            }
            FullscreenTarget::Surface => {
                Self::call_if_present(&self.dom.video, "requestFullscreen", target)
            }
        }
    }

    fn exit_fullscreen(&mut self) {
        self.dom.document.exit_fullscreen();
    }

    fn notify(&mut self, message: &str) {
        if self.dom.window.alert_with_message(message).is_err() {
            debug!(message, "alert suppressed by the page");
        }
    }
}
