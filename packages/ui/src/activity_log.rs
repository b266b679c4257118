//! In-page log of pipeline notices, fed by [`dashboard::Surface::notify`].

use dashboard::Severity;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, severity: Severity, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            severity,
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.severity == Severity::Error)
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// The log provided by the app root.
pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, severity: Severity, message: &str) {
    log.write().push(severity, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
