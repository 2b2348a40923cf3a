use dioxus::prelude::*;
use menu::MenuEntry;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;

pub const FAVOURITE_LABEL: &str = "❤️ Favourite";
pub const ADD_FAVOURITE_LABEL: &str = "🤍 Add to Favourites";
pub const SOLD_OUT_LABEL: &str = "Sold Out";

/// One menu entry. Sold-out entries get a label instead of the favourite
/// button, so they can never be toggled from here.
#[component]
pub fn PizzaItem(entry: MenuEntry, is_favourite: bool, on_toggle_favourite: EventHandler) -> Element {
    let class = if entry.is_sold_out() {
        "pizza-item sold-out"
    } else {
        "pizza-item"
    };

    rsx! {
        Card {
            class: "{class}",
            img {
                src: "{entry.image_path()}",
                alt: "{entry.name()}",
            }
            h3 { "{entry.name()}" }
            p { "{entry.description()}" }
            p { class: "price", "{entry.price()}" }
            if entry.is_sold_out() {
                p { class: "sold-out-text", "{SOLD_OUT_LABEL}" }
            } else {
                Button {
                    class: "favourite-button",
                    button_type: ButtonType::Contrast,
                    outline: !is_favourite,
                    on_click: move |_| on_toggle_favourite.call(()),
                    if is_favourite { "{FAVOURITE_LABEL}" } else { "{ADD_FAVOURITE_LABEL}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu::Price;

    fn margherita() -> MenuEntry {
        MenuEntry::new(
            "Pizza Margherita",
            "Tomato and mozarella",
            Price::dollars(10),
            "margherita.jpg",
            false,
        )
    }

    fn salamino() -> MenuEntry {
        MenuEntry::new(
            "Pizza Salamino",
            "Tomato, mozarella, and pepperoni",
            Price::dollars(15),
            "salamino.jpg",
            true,
        )
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn shows_entry_details() {
        #[component]
        fn Harness() -> Element {
            rsx! {
                PizzaItem {
                    entry: margherita(),
                    is_favourite: false,
                    on_toggle_favourite: move |_| {},
                }
            }
        }

        let html = render(Harness);
        assert!(html.contains("Pizza Margherita"));
        assert!(html.contains("Tomato and mozarella"));
        assert!(html.contains("$10"));
        assert!(html.contains("/pizzas/margherita.jpg"));
        assert!(html.contains(ADD_FAVOURITE_LABEL));
        assert!(!html.contains(SOLD_OUT_LABEL));
    }

    #[test]
    fn favourite_label_reflects_state() {
        #[component]
        fn Harness() -> Element {
            rsx! {
                PizzaItem {
                    entry: margherita(),
                    is_favourite: true,
                    on_toggle_favourite: move |_| {},
                }
            }
        }

        let html = render(Harness);
        assert!(html.contains(FAVOURITE_LABEL));
        assert!(!html.contains(ADD_FAVOURITE_LABEL));
    }

    #[test]
    fn sold_out_has_no_toggle() {
        #[component]
        fn Harness() -> Element {
            rsx! {
                PizzaItem {
                    entry: salamino(),
                    is_favourite: false,
                    on_toggle_favourite: move |_| {},
                }
            }
        }

        let html = render(Harness);
        assert!(html.contains(SOLD_OUT_LABEL));
        assert!(html.contains("sold-out"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("Favourite"));
    }
}
