use dioxus::prelude::*;

use crate::{ids, use_dashboard_signals};

#[component]
pub fn ExperienceCard() -> Element {
    let signals = use_dashboard_signals();
    let text = signals.experience.read().clone().unwrap_or_default();

    rsx! {
        section {
            class: "card experience",
            h2 { "Experience" }
            p { id: ids::EXPERIENCE_POINTS, class: "experience-points", "{text}" }
        }
    }
}
