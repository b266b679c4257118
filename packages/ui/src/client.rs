//! Shared dashboard constructor for all platforms.
//!
//! Returns a [`dashboard::Dashboard`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalTokenStore`]
//! - **Native**: an empty [`store::MemoryTokenStore`], which always sends the user to login

use api::{DashboardConfig, GraphqlClient, HttpTransport};
use dashboard::Dashboard;
use dioxus::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;

pub type PlatformDashboard = Dashboard<HttpTransport, PlatformTokenStore>;

/// Token store for the configured storage key.
pub fn make_token_store(config: &DashboardConfig) -> PlatformTokenStore {
    PlatformTokenStore::with_key(config.session.storage_key.clone())
}

/// Create a dashboard pipeline for `config`.
///
/// Cheap enough to call per use: the token is read from storage on each
/// request anyway, so nothing is lost by not keeping one around.
pub fn make_dashboard(config: &DashboardConfig) -> PlatformDashboard {
    let client = GraphqlClient::http(config.api.endpoint.clone(), make_token_store(config));
    Dashboard::new(client, config.clone())
}

/// Configuration provided by the app root.
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}
