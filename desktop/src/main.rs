use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting pizza menu (desktop) v{}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(PizzaApp);
}

#[component]
fn PizzaApp() -> Element {
    ui::App()
}
