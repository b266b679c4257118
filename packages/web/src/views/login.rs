//! Shown when there is no session. Signing in happens on the platform's own
//! login page, which stores the token this dashboard reads.

use dioxus::prelude::*;
use store::TokenStore;
use ui::{make_token_store, use_config};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let config = use_config();
    let nav = use_navigator();

    // A token may have been stored since the redirect (login in another tab).
    // Checked once after mount; the dashboard clears tokens it finds rejected.
    use_effect(move || {
        match make_token_store(&config).token() {
            Ok(Some(_)) => {
                nav.replace(Route::Home {});
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Cannot read session token: {}", e),
        }
    });

    rsx! {
        div {
            class: "login-container",
            h1 { "Student dashboard" }
            p { "You are signed out. Sign in on the platform, then come back to this page." }
            Link { to: Route::Home {}, "I have signed in" }
        }
    }
}
