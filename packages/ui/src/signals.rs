//! Signal-backed rendering surface.

use dashboard::{
    AuditView, ProfileView, ProgressBar, RadarChart, Scene, Severity, SkillTotal, Surface,
};
use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, ActivityLog};
use crate::ids;
use crate::measure::element_size;

/// Width used for a progress bar that cannot be measured.
const FALLBACK_BAR_WIDTH: f64 = 300.0;
/// Size used for the radar when its surface cannot be measured.
const FALLBACK_RADAR_SIZE: (f64, f64) = (400.0, 400.0);
const RADAR_TITLE: &str = "Technical Skills";

/// Every region of the dashboard page, one signal each.
///
/// `Copy`, like the signals it holds, so it can be moved into as many
/// closures and futures as needed.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardSignals {
    pub profile: Signal<Option<ProfileView>>,
    pub recent: Signal<Option<Vec<String>>>,
    pub audit: Signal<Option<AuditView>>,
    pub up_bar: Signal<Scene>,
    pub down_bar: Signal<Scene>,
    pub experience: Signal<Option<String>>,
    pub skills: Signal<Scene>,
    pub log: Signal<ActivityLog>,
}

/// Create the dashboard signals and provide them to child components.
pub fn use_dashboard_provider() -> DashboardSignals {
    let log = use_activity_log();
    use_context_provider(|| DashboardSignals {
        profile: Signal::new(None),
        recent: Signal::new(None),
        audit: Signal::new(None),
        up_bar: Signal::new(Scene::default()),
        down_bar: Signal::new(Scene::default()),
        experience: Signal::new(None),
        skills: Signal::new(Scene::default()),
        log,
    })
}

pub fn use_dashboard_signals() -> DashboardSignals {
    use_context::<DashboardSignals>()
}

impl Surface for DashboardSignals {
    fn show_profile(&self, profile: ProfileView) {
        let mut signal = self.profile;
        signal.set(Some(profile));
    }

    fn show_recent_activity(&self, lines: Vec<String>) {
        let mut signal = self.recent;
        signal.set(Some(lines));
    }

    fn show_audit(&self, audit: AuditView) {
        let mut up_bar = self.up_bar;
        let mut down_bar = self.down_bar;
        ProgressBar::from(&audit.up).draw(
            &mut up_bar.write(),
            bar_width(ids::COMPLETED_AUDITS_PROGRESS),
        );
        ProgressBar::from(&audit.down).draw(
            &mut down_bar.write(),
            bar_width(ids::RECEIVED_AUDITS_PROGRESS),
        );

        let mut signal = self.audit;
        signal.set(Some(audit));
    }

    fn show_experience(&self, text: String) {
        let mut signal = self.experience;
        signal.set(Some(text));
    }

    fn show_skills(&self, skills: Vec<SkillTotal>) {
        let (width, height) = element_size(ids::SKILLS_RADAR)
            .filter(|(w, h)| *w > 0.0 && *h > 0.0)
            .unwrap_or(FALLBACK_RADAR_SIZE);
        let mut scene = self.skills;
        RadarChart::new(&skills)
            .with_title(RADAR_TITLE)
            .draw(&mut scene.write(), width, height);
    }

    fn redirect(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.location().set_href(path) {
                        tracing::error!("Redirect to {} failed: {:?}", path, e);
                    }
                }
                None => tracing::error!("Redirect to {} failed: no window", path),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("Redirect to {} requested outside the browser", path);
        }
    }

    fn notify(&self, severity: Severity, message: &str) {
        let mut log = self.log;
        log_activity(&mut log, severity, message);
    }
}

fn bar_width(id: &str) -> f64 {
    element_size(id)
        .map(|(width, _)| width)
        .filter(|width| *width > 0.0)
        .unwrap_or(FALLBACK_BAR_WIDTH)
}
