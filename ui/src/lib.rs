// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
mod components;
pub mod hooks;
mod sections;

use app_state::AppState;
use components::pico::Container;
use menu::Catalog;
use menu::Clock;
use menu::ShopConfig;
use sections::footer::Footer;
use sections::header::Header;
use sections::pizza_menu::Menu;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

/// Header, menu and footer, stacked in that order.
#[component]
fn PizzaPage() -> Element {
    rsx! {
        Container {
            div {
                class: "app-container",
                Header {}
                Menu {}
                Footer {}
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    .app-container {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 2rem;
        padding: 2rem 0;
    }

    .header { text-align: center; }
    .header h1 { margin-bottom: 0; letter-spacing: 3px; }
    .tagline {
        margin-bottom: 0.5rem;
        font-size: 1.1rem;
        font-weight: 400;
        color: var(--pico-muted-color);
    }

    /* --- CONTROLS --- */
    .menu-controls {
        display: flex;
        gap: 1rem;
        align-items: center;
        justify-content: center;
    }
    .menu-controls .search-bar { margin-bottom: 0; max-width: 24rem; }
    .menu-controls .filter-button { white-space: nowrap; }

    /* --- MENU GRID --- */
    .menu {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1.5rem;
        margin-top: 1.5rem;
    }
    .pizza-item { display: flex; flex-direction: column; margin: 0; }
    .pizza-item img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: var(--pico-border-radius); }
    .pizza-item h3 { margin: 0.75rem 0 0.25rem; }
    .pizza-item .price { font-weight: bold; margin-top: auto; }
    .pizza-item.sold-out { opacity: 0.6; }
    .pizza-item.sold-out img { filter: grayscale(100%); }
    .sold-out-text { text-transform: uppercase; font-weight: bold; color: var(--pico-del-color); }

    /* --- FOOTER --- */
    .footer { text-align: center; }
    .order { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
"#;

    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| AppState::new(ShopConfig::default(), Clock::Local));

    use_hook(move || {
        info!(
            "menu with {} entries, open hours {:?}",
            Catalog::builtin().len(),
            app_state.config.hours.as_range()
        );
    });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{page_css}"
        }
        PizzaPage {}
    }
}
