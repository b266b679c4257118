//! # Dashboard pipeline
//!
//! [`Dashboard::initialize`] runs the page's startup sequence:
//!
//! 1. No stored token → redirect to the login path, no request is sent.
//! 2. Resolve the user id, then fetch and show the profile.
//! 3. Fetch and show recent activity, audit bars, experience and skills
//!    concurrently. Each step shows its result as soon as it has one; once all
//!    four have finished the first failure (in that order) is returned.
//!
//! Failures are logged and returned; whatever was already shown stays on the
//! page. An unauthorized response while resolving the user (HTTP 401/403, or a
//! GraphQL `invalid-jwt` error) clears the stored token and sends the user to
//! the login path like a missing token does.

use api::{ApiError, DashboardConfig, GraphqlClient, Transport};
use store::TokenStore;

use crate::activity::activity_lines;
use crate::format::format_experience;
use crate::skills::skill_chart_data;
use crate::surface::{Severity, Surface};
use crate::{AuditView, ProfileView};

/// State of a signed-in page, threaded to later refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
}

/// Outcome of [`Dashboard::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// No usable session; the surface was redirected to the login path.
    LoginRequired,
    Ready(Session),
}

/// Client plus configuration: everything the pipeline needs.
pub struct Dashboard<T, S> {
    client: GraphqlClient<T, S>,
    config: DashboardConfig,
}

impl<T: Transport, S: TokenStore> Dashboard<T, S> {
    pub fn new(client: GraphqlClient<T, S>, config: DashboardConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &GraphqlClient<T, S> {
        &self.client
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Run the startup sequence against `surface`.
    pub async fn initialize(&self, surface: &impl Surface) -> Result<Startup, ApiError> {
        if self.client.tokens().token()?.is_none() {
            tracing::info!("No session token, redirecting to login");
            surface.redirect(&self.config.session.login_path);
            return Ok(Startup::LoginRequired);
        }

        let user_id = match self.client.user_id().await {
            Ok(id) => id,
            Err(e) if e.is_unauthorized() => {
                tracing::warn!("Session rejected: {}", e);
                // A rejected token left in storage would send the login page straight back here
                if let Err(e) = self.client.tokens().clear() {
                    tracing::error!("Failed to clear rejected token: {}", e);
                }
                surface.redirect(&self.config.session.login_path);
                return Ok(Startup::LoginRequired);
            }
            Err(e) => return Err(self.fail(surface, "Loading user", e)),
        };
        let session = Session { user_id };
        tracing::info!(user_id, "Session resolved");

        self.load_profile(session, surface)
            .await
            .map_err(|e| self.fail(surface, "Loading profile", e))?;

        let (recent, audit, experience, skills) = futures::join!(
            self.load_recent_activity(surface),
            self.refresh_audit(session, surface),
            self.load_experience(session, surface),
            self.load_skills(surface),
        );

        let mut first_error = None;
        for (step, result) in [
            ("Loading recent activity", recent),
            ("Loading audits", audit),
            ("Loading experience", experience),
            ("Loading skills", skills),
        ] {
            if let Err(e) = result {
                let e = self.fail(surface, step, e);
                first_error.get_or_insert(e);
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }

        surface.notify(Severity::Success, "Dashboard loaded");
        Ok(Startup::Ready(session))
    }

    pub async fn load_profile(&self, session: Session, surface: &impl Surface) -> Result<(), ApiError> {
        let profile = self.client.user_details(session.user_id).await?;
        surface.show_profile(ProfileView::from(&profile));
        Ok(())
    }

    pub async fn load_recent_activity(&self, surface: &impl Surface) -> Result<(), ApiError> {
        let recent = self
            .client
            .recent_projects(self.config.queries.recent_limit)
            .await?;
        surface.show_recent_activity(activity_lines(&recent));
        Ok(())
    }

    /// Fetch audit totals and redraw both bars. Re-run on every window resize.
    pub async fn refresh_audit(&self, session: Session, surface: &impl Surface) -> Result<(), ApiError> {
        let audit = self.client.audit(session.user_id).await?;
        surface.show_audit(AuditView::from(&audit));
        Ok(())
    }

    pub async fn load_experience(&self, session: Session, surface: &impl Surface) -> Result<(), ApiError> {
        let total = self
            .client
            .experience(session.user_id, &self.config.queries.module_path)
            .await?;
        surface.show_experience(format_experience(total));
        Ok(())
    }

    pub async fn load_skills(&self, surface: &impl Surface) -> Result<(), ApiError> {
        let transactions = self.client.skills().await?;
        let skills = skill_chart_data(&transactions);
        if skills.is_empty() {
            surface.notify(Severity::Warning, "No skills recorded yet");
        }
        surface.show_skills(skills);
        Ok(())
    }

    /// Forget the token and leave for the login path.
    pub fn logout(&self, surface: &impl Surface) {
        if let Err(e) = self.client.tokens().clear() {
            tracing::error!("Logout error: {}", e);
        }
        surface.redirect(&self.config.session.login_path);
    }

    fn fail(&self, surface: &impl Surface, step: &str, error: ApiError) -> ApiError {
        tracing::error!("{} failed: {}", step, error);
        surface.notify(Severity::Error, &format!("{step} failed: {error}"));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkillTotal;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use store::MemoryTokenStore;

    /// Answers by matching a fragment of the query text.
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        routes: Rc<RefCell<Vec<(&'static str, Result<Value, u16>)>>>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl ScriptedTransport {
        fn route(self, fragment: &'static str, reply: Result<Value, u16>) -> Self {
            self.routes.borrow_mut().push((fragment, reply));
            self
        }

        fn calls(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for ScriptedTransport {
        async fn post(
            &self,
            _endpoint: &str,
            _token: &str,
            request: &api::GraphqlRequest<'_>,
        ) -> Result<Value, ApiError> {
            self.calls.borrow_mut().push(request.query.to_string());
            let routes = self.routes.borrow();
            let reply = routes
                .iter()
                .find(|(fragment, _)| request.query.contains(fragment))
                .map(|(_, reply)| reply.clone())
                .unwrap_or(Err(404));
            reply.map_err(|status| ApiError::Status {
                status,
                body: String::new(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        profile: RefCell<Option<ProfileView>>,
        recent: RefCell<Option<Vec<String>>>,
        audit: RefCell<Option<AuditView>>,
        experience: RefCell<Option<String>>,
        skills: RefCell<Option<Vec<SkillTotal>>>,
        redirects: RefCell<Vec<String>>,
        notices: RefCell<HashMap<String, Severity>>,
    }

    impl Surface for RecordingSurface {
        fn show_profile(&self, profile: ProfileView) {
            *self.profile.borrow_mut() = Some(profile);
        }
        fn show_recent_activity(&self, lines: Vec<String>) {
            *self.recent.borrow_mut() = Some(lines);
        }
        fn show_audit(&self, audit: AuditView) {
            *self.audit.borrow_mut() = Some(audit);
        }
        fn show_experience(&self, text: String) {
            *self.experience.borrow_mut() = Some(text);
        }
        fn show_skills(&self, skills: Vec<SkillTotal>) {
            *self.skills.borrow_mut() = Some(skills);
        }
        fn redirect(&self, path: &str) {
            self.redirects.borrow_mut().push(path.to_string());
        }
        fn notify(&self, severity: Severity, message: &str) {
            self.notices.borrow_mut().insert(message.to_string(), severity);
        }
    }

    fn full_platform() -> ScriptedTransport {
        ScriptedTransport::default()
            .route("{ user { id } }", Ok(json!({ "data": { "user": [{ "id": 77 }] } })))
            .route("firstName", Ok(json!({ "data": { "user": [{
                "id": 77, "firstName": "Grace", "lastName": "Hopper",
                "email": "grace@example.com", "campus": "bahrain", "login": "ghopper"
            }] } })))
            .route("auditRatio", Ok(json!({ "data": { "user": [{
                "auditRatio": 1.26, "totalUp": 80, "totalDown": 20
            }] } })))
            .route("transaction_aggregate", Ok(json!({ "data": {
                "transaction_aggregate": { "aggregate": { "sum": { "amount": 1_234_567 } } }
            } })))
            .route("skill_%", Ok(json!({ "data": { "user": [{ "transactions": [
                { "type": "skill_go", "amount": 3 },
                { "type": "skill_go", "amount": 2 },
                { "type": "skill_front-end", "amount": 5 }
            ] }] } })))
            .route("createdAt", Ok(json!({ "data": { "transaction": [
                { "object": { "type": "project", "name": "graphql" } }
            ] } })))
    }

    fn dashboard(transport: ScriptedTransport, tokens: MemoryTokenStore) -> Dashboard<ScriptedTransport, MemoryTokenStore> {
        Dashboard::new(
            GraphqlClient::new("https://example.test/graphql", transport, tokens),
            DashboardConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_missing_token_redirects_without_requests() {
        let transport = full_platform();
        let dashboard = dashboard(transport.clone(), MemoryTokenStore::new());
        let surface = RecordingSurface::default();

        let startup = dashboard.initialize(&surface).await.unwrap();

        assert_eq!(startup, Startup::LoginRequired);
        assert_eq!(*surface.redirects.borrow(), vec!["/login".to_string()]);
        assert_eq!(transport.calls(), 0);
        assert!(surface.profile.borrow().is_none());
    }

    #[tokio::test]
    async fn test_full_startup_renders_every_region() {
        let transport = full_platform();
        let dashboard = dashboard(transport.clone(), MemoryTokenStore::with_token("jwt"));
        let surface = RecordingSurface::default();

        let startup = dashboard.initialize(&surface).await.unwrap();
        assert_eq!(startup, Startup::Ready(Session { user_id: 77 }));
        assert_eq!(transport.calls(), 6);
        assert!(surface.redirects.borrow().is_empty());

        let profile = surface.profile.borrow().clone().unwrap();
        assert_eq!(profile.banner, "Welcome to your dashboard, Grace Hopper");
        assert!(profile.lines.contains(&"Campus: Bahrain".to_string()));

        let audit = surface.audit.borrow().clone().unwrap();
        assert_eq!(audit.ratio, "1.3");
        assert_eq!((audit.up.percent, audit.down.percent), (100.0, 25.0));

        assert_eq!(surface.experience.borrow().as_deref(), Some("1.23 MB"));
        assert_eq!(
            surface.recent.borrow().clone().unwrap(),
            vec!["project — graphql".to_string()]
        );
        assert_eq!(
            surface.skills.borrow().clone().unwrap(),
            vec![
                SkillTotal { label: "Go".into(), amount: 5 },
                SkillTotal { label: "Front End".into(), amount: 5 },
            ]
        );
        assert_eq!(
            surface.notices.borrow().get("Dashboard loaded"),
            Some(&Severity::Success)
        );
    }

    #[tokio::test]
    async fn test_unauthorized_user_lookup_redirects() {
        let transport = ScriptedTransport::default().route("{ user { id } }", Err(401));
        let tokens = MemoryTokenStore::with_token("expired");
        let dashboard = dashboard(transport.clone(), tokens.clone());
        let surface = RecordingSurface::default();

        let startup = dashboard.initialize(&surface).await.unwrap();
        assert_eq!(startup, Startup::LoginRequired);
        assert_eq!(*surface.redirects.borrow(), vec!["/login".to_string()]);
        assert_eq!(transport.calls(), 1);
        assert!(surface.profile.borrow().is_none());
        assert_eq!(tokens.token().unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejected_token_is_not_retried() {
        let transport = ScriptedTransport::default().route("{ user { id } }", Err(403));
        let tokens = MemoryTokenStore::with_token("expired");
        let dashboard = dashboard(transport.clone(), tokens.clone());
        let surface = RecordingSurface::default();

        // Coming back from the login page without signing in again
        assert_eq!(dashboard.initialize(&surface).await.unwrap(), Startup::LoginRequired);
        assert_eq!(dashboard.initialize(&surface).await.unwrap(), Startup::LoginRequired);

        assert_eq!(transport.calls(), 1);
        assert_eq!(surface.redirects.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_jwt_graphql_error_redirects() {
        let transport = ScriptedTransport::default().route(
            "{ user { id } }",
            Ok(json!({ "errors": [{
                "message": "Could not verify JWT: JWTExpired",
                "extensions": { "path": "$", "code": "invalid-jwt" }
            }] })),
        );
        let tokens = MemoryTokenStore::with_token("expired");
        let dashboard = dashboard(transport.clone(), tokens.clone());
        let surface = RecordingSurface::default();

        let startup = dashboard.initialize(&surface).await.unwrap();
        assert_eq!(startup, Startup::LoginRequired);
        assert_eq!(*surface.redirects.borrow(), vec!["/login".to_string()]);
        assert_eq!(tokens.token().unwrap(), None);
        assert!(surface.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_profile_failure_aborts_before_fan_out() {
        let transport = ScriptedTransport::default()
            .route("{ user { id } }", Ok(json!({ "data": { "user": [{ "id": 1 }] } })))
            .route("firstName", Err(500));
        let dashboard = dashboard(transport.clone(), MemoryTokenStore::with_token("t"));
        let surface = RecordingSurface::default();

        let err = dashboard.initialize(&surface).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(transport.calls(), 2);
        assert!(surface.audit.borrow().is_none());
        assert_eq!(
            surface.notices.borrow().get(&format!("Loading profile failed: {err}")),
            Some(&Severity::Error)
        );
    }

    #[tokio::test]
    async fn test_one_failed_step_keeps_the_others() {
        let transport = full_platform();
        // Routes are matched first to last, so this shadows the audit reply.
        transport.routes.borrow_mut().insert(0, ("auditRatio", Err(502)));
        let dashboard = dashboard(transport.clone(), MemoryTokenStore::with_token("t"));
        let surface = RecordingSurface::default();

        let err = dashboard.initialize(&surface).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
        assert_eq!(transport.calls(), 6);
        assert!(surface.audit.borrow().is_none());
        assert!(surface.recent.borrow().is_some());
        assert!(surface.experience.borrow().is_some());
        assert!(surface.skills.borrow().is_some());
        assert!(surface.notices.borrow().get("Dashboard loaded").is_none());
    }

    #[tokio::test]
    async fn test_first_failure_in_launch_order_is_returned() {
        let transport = full_platform();
        transport.routes.borrow_mut().insert(0, ("skill_%", Err(503)));
        transport.routes.borrow_mut().insert(0, ("createdAt", Err(500)));
        let dashboard = dashboard(transport, MemoryTokenStore::with_token("t"));
        let surface = RecordingSurface::default();

        let err = dashboard.initialize(&surface).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_no_skills_is_a_warning() {
        let transport = full_platform();
        transport
            .routes
            .borrow_mut()
            .insert(0, ("skill_%", Ok(json!({ "data": { "user": [{ "transactions": [] }] } }))));
        let dashboard = dashboard(transport, MemoryTokenStore::with_token("t"));
        let surface = RecordingSurface::default();

        dashboard.initialize(&surface).await.unwrap();
        assert_eq!(surface.skills.borrow().clone(), Some(vec![]));
        assert_eq!(
            surface.notices.borrow().get("No skills recorded yet"),
            Some(&Severity::Warning)
        );
    }

    #[tokio::test]
    async fn test_refresh_audit_refetches_every_time() {
        let transport = full_platform();
        let dashboard = dashboard(transport.clone(), MemoryTokenStore::with_token("t"));
        let surface = RecordingSurface::default();
        let session = Session { user_id: 77 };

        dashboard.refresh_audit(session, &surface).await.unwrap();
        dashboard.refresh_audit(session, &surface).await.unwrap();
        assert_eq!(transport.calls(), 2);
        assert!(surface.audit.borrow().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_token_and_redirects() {
        let tokens = MemoryTokenStore::with_token("t");
        let dashboard = dashboard(ScriptedTransport::default(), tokens.clone());
        let surface = RecordingSurface::default();

        dashboard.logout(&surface);
        assert_eq!(tokens.token().unwrap(), None);
        assert_eq!(*surface.redirects.borrow(), vec!["/login".to_string()]);
    }
}
