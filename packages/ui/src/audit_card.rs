use dashboard::BAR_HEIGHT;
use dioxus::prelude::*;

use crate::{ids, use_dashboard_signals, SceneSvg};

/// Audit ratio with the done/received bars.
#[component]
pub fn AuditCard() -> Element {
    let signals = use_dashboard_signals();
    let audit = signals.audit.read().clone();
    let ratio = audit.as_ref().map(|a| a.ratio.clone()).unwrap_or_default();
    let up_label = audit.as_ref().map(|a| a.up.label.clone()).unwrap_or_default();
    let down_label = audit.as_ref().map(|a| a.down.label.clone()).unwrap_or_default();

    rsx! {
        section {
            class: "card audits",
            h2 { "Audits ratio" }
            div {
                class: "audit-row",
                span { class: "audit-caption", "Done" }
                SceneSvg {
                    id: ids::COMPLETED_AUDITS_PROGRESS,
                    scene: signals.up_bar.read().clone(),
                    height: BAR_HEIGHT,
                }
                span { id: ids::COMPLETED_AUDITS_TEXT, class: "audit-amount", "{up_label}" }
            }
            div {
                class: "audit-row",
                span { class: "audit-caption", "Received" }
                SceneSvg {
                    id: ids::RECEIVED_AUDITS_PROGRESS,
                    scene: signals.down_bar.read().clone(),
                    height: BAR_HEIGHT,
                }
                span { id: ids::RECEIVED_AUDITS_TEXT, class: "audit-amount", "{down_label}" }
            }
            p {
                class: "audit-ratio",
                span { id: ids::AUDIT_RATIO, "{ratio}" }
            }
        }
    }
}
