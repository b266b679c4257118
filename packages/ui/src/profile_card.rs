use dioxus::prelude::*;

use crate::{ids, use_dashboard_signals};

/// `Welcome to your dashboard, {first} {last}` once the profile has loaded.
#[component]
pub fn WelcomeBanner() -> Element {
    let signals = use_dashboard_signals();
    let profile = signals.profile.read();
    let banner = profile.as_ref().map(|p| p.banner.as_str()).unwrap_or("Welcome");

    rsx! {
        h1 { id: ids::WELCOME_MESSAGE, class: "dashboard-welcome", "{banner}" }
    }
}

/// Label/value lines of the user's profile.
#[component]
pub fn UserInfo() -> Element {
    let signals = use_dashboard_signals();
    let lines = signals
        .profile
        .read()
        .as_ref()
        .map(|p| p.lines.clone())
        .unwrap_or_default();

    rsx! {
        section {
            class: "card user-info",
            h2 { "Profile" }
            ul {
                id: ids::USER_INFO,
                for line in lines {
                    li { "{line}" }
                }
            }
        }
    }
}
