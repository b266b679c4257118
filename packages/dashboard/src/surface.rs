//! The rendering surface the pipeline writes into.
//!
//! Every method replaces what the corresponding page region showed before;
//! nothing is appended. Methods take `&self` so the four concurrent render
//! steps can share one surface on a single-threaded executor.

use crate::{AuditView, ProfileView, SkillTotal};

/// Severity of a pipeline notice shown in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Surface {
    /// Welcome banner and user-info list.
    fn show_profile(&self, profile: ProfileView);

    /// Recent-activity list, one entry per line.
    fn show_recent_activity(&self, lines: Vec<String>);

    /// Audit ratio, both progress bars and their captions.
    fn show_audit(&self, audit: AuditView);

    /// Experience points text.
    fn show_experience(&self, text: String);

    /// Data for the skills radar; empty clears the chart.
    fn show_skills(&self, skills: Vec<SkillTotal>);

    /// Leave the dashboard for `path`.
    fn redirect(&self, path: &str);

    /// Record a pipeline milestone or failure for the user-visible log.
    fn notify(&self, _severity: Severity, _message: &str) {}
}
