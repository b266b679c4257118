//! Element ids of the dashboard page.

pub const WELCOME_MESSAGE: &str = "dashboard-welcome-message";
pub const USER_INFO: &str = "user-info-container";
pub const RECENT_ACTIVITY: &str = "recent-activity-container";
pub const AUDIT_RATIO: &str = "audit-ratio-value";
pub const COMPLETED_AUDITS_PROGRESS: &str = "completed-audits-progress";
pub const RECEIVED_AUDITS_PROGRESS: &str = "received-audits-progress";
pub const COMPLETED_AUDITS_TEXT: &str = "completed-audits-text";
pub const RECEIVED_AUDITS_TEXT: &str = "received-audits-text";
pub const EXPERIENCE_POINTS: &str = "experience-points";
pub const SKILLS_RADAR: &str = "skills-radar-chart";
pub const LOGOUT_LINK: &str = "logout-link";
