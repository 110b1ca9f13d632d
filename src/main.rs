use dioxus::prelude::*;

mod components;
mod config;
mod db;
mod logging;
mod platform;
mod service_lifetime;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    logging::init_logging();
    tracing::info!("Starting {} v{}", config::APP_NAME, env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "RustySound" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
