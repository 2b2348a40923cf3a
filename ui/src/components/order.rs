use dioxus::prelude::*;

use crate::components::pico::Button;

/// Call-to-action shown in the footer while the shop is open.
///
/// The button is deliberately inert: there is no checkout flow behind it.
#[component]
pub fn Order() -> Element {
    rsx! {
        div {
            class: "order",
            p { "We’re currently open!" }
            Button {
                class: "order-button",
                "Order Now"
            }
        }
    }
}
