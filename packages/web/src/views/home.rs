//! The dashboard page.

use dashboard::{Session, Startup};
use dioxus::prelude::*;
use ui::{
    make_dashboard, use_config, use_dashboard_provider, use_window_resize, ActivityLogPanel,
    ActivityLogToggle, AuditCard, ExperienceCard, LogoutLink, RecentActivity, SkillsRadar,
    UserInfo, WelcomeBanner, DASHBOARD_CSS,
};

#[component]
pub fn Home() -> Element {
    let config = use_config();
    let signals = use_dashboard_provider();
    let mut session = use_signal(|| Option::<Session>::None);

    // Token check, profile, then the four concurrent sections
    let startup_config = config.clone();
    let _startup = use_resource(move || {
        let config = startup_config.clone();
        async move {
            match make_dashboard(&config).initialize(&signals).await {
                Ok(Startup::Ready(s)) => session.set(Some(s)),
                Ok(Startup::LoginRequired) => {}
                Err(e) => tracing::error!("Initialization error: {}", e),
            }
        }
    });

    // Audit totals are fetched again and the bars redrawn at the new width
    use_window_resize(move || {
        let config = config.clone();
        async move {
            let Some(s) = *session.peek() else {
                return;
            };
            if let Err(e) = make_dashboard(&config).refresh_audit(s, &signals).await {
                tracing::error!("Audit refresh failed: {}", e);
            }
        }
    });

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        header {
            class: "dashboard-header",
            WelcomeBanner {}
            LogoutLink {}
        }

        main {
            class: "dashboard",
            UserInfo {}
            RecentActivity {}
            AuditCard {}
            ExperienceCard {}
            SkillsRadar {}
        }

        ActivityLogPanel {}
        ActivityLogToggle {}
    }
}
