//! Browser bindings: the `<video>` element as engine, the player markup as the
//! widget set, and the page for timers, fullscreen and alerts.

mod dom;
mod dom_engine;
mod dom_host;
mod dom_surface;
mod widgets;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};
use web_sys::EventTarget;

use crate::controller::{ControlEvent, ControlId, PlaybackUIController};
use crate::error::PlayerError;

use dom::PlayerDom;
use dom_engine::DomEngine;
use dom_host::DomHost;
use dom_surface::DomSurface;
use widgets::{DomWidget, Subscription};

type WebController = PlaybackUIController<DomEngine, DomSurface, DomHost>;

/// Route events back into the controller from listeners, timers and futures.
#[derive(Clone)]
pub struct EventSink(Weak<RefCell<WebController>>);

impl EventSink {
    pub fn dispatch(&self, event: ControlEvent) {
        let Some(controller) = self.0.upgrade() else {
            debug!(?event, "controller gone, dropping event");
            return;
        };
        let Ok(mut controller) = controller.try_borrow_mut() else {
            // Raised from inside another dispatch; run it once that finishes.
            let sink = self.clone();
            wasm_bindgen_futures::spawn_local(async move { sink.dispatch(event) });
            return;
        };
        controller.dispatch(event);
    }
}

/// A live controller plus every listener wired to it.
pub struct PlayerBinding {
    controller: Rc<RefCell<WebController>>,
    subscriptions: Vec<Subscription>,
}

impl PlayerBinding {
    /// Locate the player markup, build the controller and subscribe each widget
    /// to its one event kind.
    pub fn init() -> Result<Self, PlayerError> {
        let page = PlayerDom::locate()?;
        let settings = page.settings();

        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<WebController>>| {
            let sink = EventSink(weak.clone());
            RefCell::new(PlaybackUIController::new(
                DomEngine::new(page.video.clone(), sink.clone()),
                DomSurface::new(page.clone()),
                DomHost::new(page.clone(), sink),
                settings,
            ))
        });
        let sink = EventSink(Rc::downgrade(&controller));

        let mut subscriptions = Vec::new();
        for id in ControlId::ALL {
            let sink = sink.clone();
            let widget = DomWidget::new(id, page.clone());
            subscriptions.extend(widget.subscribe(
                id.event_kind(),
                Rc::new(move |signal| {
                    if let Some(event) = id.translate(signal) {
                        sink.dispatch(event);
                    }
                }),
            ));
        }

        let video = EventTarget::from(page.video.clone());
        let notifications: [(&'static str, fn() -> ControlEvent); 3] = [
            ("timeupdate", || ControlEvent::TimeUpdate),
            ("play", || ControlEvent::EnginePlayed),
            ("pause", || ControlEvent::EnginePaused),
        ];
        for (event, make) in notifications {
            let sink = sink.clone();
            subscriptions.push(Subscription::listen(&video, event, move |_| {
                sink.dispatch(make())
            }));
        }

        controller.borrow_mut().init();
        info!(listeners = subscriptions.len(), "player bound to page");
        Ok(Self {
            controller,
            subscriptions,
        })
    }

    /// Remove every listener and clear the pending hide timer.
    pub fn dispose(mut self) {
        self.subscriptions.clear();
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.dispose(),
            Err(_) => debug!("controller busy during dispose"),
        }
    }
}
