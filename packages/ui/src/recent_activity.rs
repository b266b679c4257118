use dioxus::prelude::*;

use crate::{ids, use_dashboard_signals};

#[component]
pub fn RecentActivity() -> Element {
    let signals = use_dashboard_signals();
    let recent = signals.recent.read().clone();

    rsx! {
        section {
            class: "card recent-activity",
            h2 { "Recent activity" }
            ul {
                id: ids::RECENT_ACTIVITY,
                {match recent {
                    None => rsx! { li { class: "placeholder", "Loading..." } },
                    Some(lines) => rsx! {
                        for (i, line) in lines.into_iter().enumerate() {
                            li { key: "{i}", "{line}" }
                        }
                    },
                }}
            }
        }
    }
}
