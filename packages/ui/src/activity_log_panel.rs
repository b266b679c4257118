use dioxus::prelude::*;

use dashboard::Severity;

use crate::activity_log::{use_activity_log, LogEntry};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn entry_class(entry: &LogEntry) -> &'static str {
    match entry.severity {
        Severity::Error => "activity-log-entry error",
        Severity::Warning => "activity-log-entry warning",
        Severity::Success => "activity-log-entry success",
        Severity::Info => "activity-log-entry info",
    }
}

/// Newest-first list of pipeline notices. Hidden until toggled.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "Activity" }
                button {
                    onclick: move |_| log.write().entries.clear(),
                    "Clear"
                }
                button {
                    onclick: move |_| log.write().visible = false,
                    "Close"
                }
            }
            if entries.is_empty() {
                p { class: "activity-log-empty", "Nothing yet." }
            }
            ul {
                class: "activity-log-entries",
                for (i, entry) in entries.iter().enumerate().rev() {
                    li {
                        key: "{i}",
                        class: entry_class(entry),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Button showing how many notices were logged; errors turn it red.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_errors = log().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| log.write().toggle(),
            if count > 0 { "{count}" } else { "Log" }
        }
    }
}
