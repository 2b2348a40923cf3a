//=============================================================================
// File: src/sections/pizza_menu.rs
//=============================================================================
use dioxus::prelude::*;
use menu::MenuState;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::SearchInput;
use crate::components::pizza_item::PizzaItem;

/// A favourite toggle bound to one entry's name.
fn bind_toggle(mut state: Signal<MenuState>, name: String) -> impl FnMut(()) + 'static {
    move |_| {
        state.write().toggle_favourite(&name);
    }
}

/// The only stateful part of the page: search, favourites and the filtered
/// list. Child views receive snapshots and callbacks, never the state itself.
///
/// Starts from a fresh session unless an ancestor provides a `MenuState`
/// context to start from.
#[component]
pub fn Menu() -> Element {
    let mut state = use_signal(|| try_consume_context::<MenuState>().unwrap_or_default());

    // Re-derived whenever the state signal is written.
    let visible = use_memo(move || state.read().visible());

    let search_term = state.read().search_term().to_string();
    let favourites_only = state.read().favourites_only();
    let empty_hint = if favourites_only {
        "Mark a few pizzas as favourites, or show all pizzas again."
    } else {
        "Try a different search."
    };

    let items = visible().into_iter().map(move |entry| {
        let name = entry.name().to_string();
        let is_favourite = state.read().is_favourite(&name);
        rsx! {
            PizzaItem {
                key: "{name}",
                entry,
                is_favourite,
                on_toggle_favourite: bind_toggle(state, name.clone()),
            }
        }
    });

    rsx! {
        main {
            div {
                class: "menu-controls",
                SearchInput {
                    class: "search-bar",
                    value: search_term,
                    placeholder: "Search for pizzas...".to_string(),
                    on_input: move |text: String| state.write().set_search_term(text),
                }
                Button {
                    class: "filter-button",
                    button_type: ButtonType::Secondary,
                    on_click: move |_| state.write().toggle_favourites_only(),
                    if favourites_only { "Show All Pizzas" } else { "Show Favourites Only" }
                }
            }
            if visible.read().is_empty() {
                EmptyState {
                    title: "No pizzas found".to_string(),
                    description: Some(empty_hint.to_string()),
                    icon: rsx! { "🍕" },
                }
            } else {
                div {
                    class: "menu",
                    {items}
                }
            }
        }
    }
}
