//=============================================================================
// File: src/sections/header.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::hooks::use_is_open::use_is_open;

/// Brand title, with the tagline shown only while the shop is open.
#[component]
pub fn Header() -> Element {
    let app_state = use_context::<AppState>();
    let is_open = use_is_open();

    rsx! {
        header {
            class: "header",
            if is_open {
                h2 { class: "tagline", "{app_state.config.tagline}" }
            }
            h1 {
                style: "color: orange; font-size: 48px; text-transform: uppercase;",
                "{app_state.config.brand}"
            }
        }
    }
}
