use crate::controller::PlaybackRate;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::web::PlayerBinding;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use tracing::warn;

const ICON: &str = "material-symbols-outlined";

/// Player page - video surface, overlay controls and the file picker.
///
/// The markup is static; once mounted, a `PlayerBinding` takes over every
/// widget and writes display state straight into the DOM.
#[component]
pub fn PlayerView() -> Element {
    #[cfg(target_arch = "wasm32")]
    {
        let binding = use_hook(|| Rc::new(RefCell::new(None::<PlayerBinding>)));

        {
            let binding = binding.clone();
            use_effect(move || {
                if binding.borrow().is_some() {
                    return;
                }
                match PlayerBinding::init() {
                    Ok(bound) => *binding.borrow_mut() = Some(bound),
                    Err(err) => warn!(%err, "player controls unavailable"),
                }
            });
        }

        use_drop(move || {
            if let Some(bound) = binding.borrow_mut().take() {
                bound.dispose();
            }
        });
    }

    let speed_choices: Vec<String> = PlaybackRate::ALL
        .iter()
        .map(|rate| rate.as_f64().to_string())
        .collect();

    rsx! {
        div { class: "player-page",
            header { class: "file-bar",
                label { class: "file-picker", r#for: "file-input",
                    span { class: ICON, "folder_open" }
                    "Open video"
                }
                input {
                    id: "file-input",
                    r#type: "file",
                    accept: "video/*",
                    hidden: true,
                }
                span { id: "file-name", class: "file-name", "No file selected" }
            }

            div { id: "player-container", class: "player-container",
                video { id: "video-player", class: "video-player" }

                div { id: "controls-overlay", class: "controls-overlay",
                    input {
                        id: "progress-bar",
                        class: "progress-bar",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "0",
                    }

                    div { class: "controls-row",
                        div { class: "controls-group",
                            button {
                                id: "rewind-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Back 10 seconds",
                                span { class: ICON, "replay_10" }
                            }
                            button {
                                id: "play-pause-btn",
                                class: "control-btn control-btn-primary",
                                r#type: "button",
                                title: "Play / pause",
                                span { id: "play-pause-icon", class: ICON, "play_arrow" }
                            }
                            button {
                                id: "forward-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Forward 10 seconds",
                                span { class: ICON, "forward_10" }
                            }
                            span { id: "time-display", class: "time-display", "00:00 / 00:00" }
                        }

                        div { class: "controls-group",
                            button {
                                id: "mute-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Mute",
                                span { class: ICON, "no_sound" }
                            }
                            span {
                                id: "volume-icon",
                                class: "{ICON} volume-icon",
                                role: "button",
                                title: "Silence / full volume",
                                "volume_up"
                            }
                            input {
                                id: "volume-slider",
                                class: "volume-slider",
                                r#type: "range",
                                min: "0",
                                max: "1",
                                step: "0.01",
                                value: "1",
                            }
                            button {
                                id: "loop-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Loop",
                                span { class: ICON, "repeat" }
                            }
                            button {
                                id: "shuffle-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Shuffle",
                                span { class: ICON, "shuffle" }
                            }
                            div { class: "speed-control",
                                button {
                                    id: "speed-btn",
                                    class: "control-btn",
                                    r#type: "button",
                                    title: "Playback speed",
                                    span { class: ICON, "speed" }
                                }
                                div { id: "speed-menu", class: "speed-menu",
                                    for speed in speed_choices {
                                        button {
                                            key: "{speed}",
                                            class: "speed-option",
                                            r#type: "button",
                                            "data-speed": "{speed}",
                                            "{speed}x"
                                        }
                                    }
                                }
                            }
                            button {
                                id: "rotation-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Rotate",
                                span { class: ICON, "screen_rotation" }
                            }
                            button {
                                id: "fullscreen-btn",
                                class: "control-btn",
                                r#type: "button",
                                title: "Fullscreen",
                                span { class: ICON, "fullscreen" }
                            }
                        }
                    }
                }
            }
        }
    }
}
