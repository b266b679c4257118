//! This crate contains all shared UI for the dashboard.
//!
//! Components render from the signals in [`DashboardSignals`]; the
//! [`dashboard::Dashboard`] pipeline writes into those signals through their
//! [`dashboard::Surface`] implementation.

use dioxus::prelude::*;

pub const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

mod client;
pub use client::{make_dashboard, make_token_store, use_config, PlatformDashboard, PlatformTokenStore};

mod signals;
pub use signals::{use_dashboard_provider, use_dashboard_signals, DashboardSignals};

pub mod ids;

mod measure;
pub use measure::{element_size, use_window_resize};

mod scene_view;
pub use scene_view::SceneSvg;

mod profile_card;
pub use profile_card::{UserInfo, WelcomeBanner};

mod recent_activity;
pub use recent_activity::RecentActivity;

mod audit_card;
pub use audit_card::AuditCard;

mod experience_card;
pub use experience_card::ExperienceCard;

mod skills_radar;
pub use skills_radar::SkillsRadar;

mod logout;
pub use logout::LogoutLink;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogEntry};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
