//! The components module contains the rsx markup for the player page.

mod player_view;

pub use player_view::*;
