use dioxus::prelude::*;

use crate::{ids, make_dashboard, use_config, use_dashboard_signals};

/// Link that forgets the session token and goes to the login page.
#[component]
pub fn LogoutLink(#[props(default = "Logout".to_string())] label: String) -> Element {
    let config = use_config();
    let signals = use_dashboard_signals();

    let onclick = move |evt: MouseEvent| {
        evt.prevent_default();
        make_dashboard(&config).logout(&signals);
    };

    rsx! {
        a {
            id: ids::LOGOUT_LINK,
            class: "logout-link",
            href: "#",
            onclick: onclick,
            "{label}"
        }
    }
}
