use dioxus::prelude::*;

mod components;
mod controller;
mod error;
mod settings;
#[cfg(target_arch = "wasm32")]
mod web;

use components::PlayerView;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");
const MATERIAL_SYMBOLS: &str =
    "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:opsz,wght,FILL,GRAD@24,400,0,0";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Reelpad" }
        document::Meta { name: "theme-color", content: "#111114" }
        document::Link { rel: "stylesheet", href: MATERIAL_SYMBOLS }
        document::Stylesheet { href: PLAYER_CSS }

        PlayerView {}
    }
}
