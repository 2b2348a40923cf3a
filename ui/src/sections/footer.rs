//=============================================================================
// File: src/sections/footer.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::order::Order;
use crate::hooks::use_is_open::use_is_open;

pub const CLOSED_MESSAGE: &str = "Sorry, we're closed";

#[component]
pub fn Footer() -> Element {
    let is_open = use_is_open();

    rsx! {
        footer {
            class: "footer",
            if is_open {
                Order {}
            } else {
                p { class: "closed-message", "{CLOSED_MESSAGE}" }
            }
        }
    }
}
