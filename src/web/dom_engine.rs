use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{HtmlVideoElement, Url};

use super::EventSink;
use crate::controller::{ControlEvent, MediaSource, PlayAttempt, PlaybackEngine};
use crate::error::PlayerError;

/// `<video>` element as the playback engine.
pub struct DomEngine {
    video: HtmlVideoElement,
    sink: EventSink,
    object_url: Option<String>,
}

impl DomEngine {
    pub fn new(video: HtmlVideoElement, sink: EventSink) -> Self {
        Self {
            video,
            sink,
            object_url: None,
        }
    }

    fn release_object_url(&mut self) {
        if let Some(previous) = self.object_url.take() {
            if let Err(err) = Url::revoke_object_url(&previous) {
                debug!(error = %js_error_name(&err), "could not revoke object url");
            }
        }
    }
}

impl Drop for DomEngine {
    fn drop(&mut self) {
        self.release_object_url();
    }
}

fn js_error_name(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

impl PlaybackEngine for DomEngine {
    fn play(&mut self, attempt: PlayAttempt) {
        let sink = self.sink.clone();
        match self.video.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = wasm_bindgen_futures::JsFuture::from(promise)
                        .await
                        .map(|_| ())
                        .map_err(|err| PlayerError::PlayRejected(js_error_name(&err)));
                    sink.dispatch(ControlEvent::PlaySettled { attempt, outcome });
                });
            }
            Err(err) => {
                let outcome = Err(PlayerError::PlayRejected(js_error_name(&err)));
                // Still inside the current dispatch; report on the next tick.
                wasm_bindgen_futures::spawn_local(async move {
                    sink.dispatch(ControlEvent::PlaySettled { attempt, outcome });
                });
            }
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.video.pause() {
            warn!(error = %js_error_name(&err), "pause failed");
        }
    }

    fn load(&mut self, source: &MediaSource) {
        self.release_object_url();
        self.video.set_src(&source.url);
        self.video.load();
        if source.is_object_url() {
            self.object_url = Some(source.url.clone());
        }
    }

    fn is_paused(&self) -> bool {
        self.video.paused()
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }

    fn volume(&self) -> f64 {
        self.video.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.video.set_volume(volume);
    }

    fn is_muted(&self) -> bool {
        self.video.muted()
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.set_muted(muted);
    }

    fn playback_rate(&self) -> f64 {
        self.video.playback_rate()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.video.set_playback_rate(rate);
    }

    fn is_looping(&self) -> bool {
        self.video.loop_()
    }

    fn set_looping(&mut self, looping: bool) {
        self.video.set_loop(looping);
    }
}
