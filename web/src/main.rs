use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting pizza menu (web) v{}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(PizzaApp);
}

#[component]
fn PizzaApp() -> Element {
    ui::App()
}
