use dioxus::prelude::*;

use crate::{ids, use_dashboard_signals, SceneSvg};

/// Radar of skill totals. Empty until skills have loaded, and stays empty
/// for users without skill transactions.
#[component]
pub fn SkillsRadar() -> Element {
    let signals = use_dashboard_signals();
    let scene = signals.skills.read().clone();

    rsx! {
        section {
            class: "card skills",
            h2 { "Skills" }
            div {
                class: "skills-radar",
                SceneSvg { id: ids::SKILLS_RADAR, scene }
            }
        }
    }
}
