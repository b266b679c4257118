use api::DashboardConfig;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::ActivityLog;
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration compiled into the bundle; a browser has no config directory.
const CONFIG_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| DashboardConfig::from_toml_or_default(CONFIG_TOML));
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
