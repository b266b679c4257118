//! # Dashboard configuration — `dashboard.toml`
//!
//! ```toml
//! [api]
//! endpoint = "https://learn.reboot01.com/api/graphql-engine/v1/graphql"
//!
//! [session]
//! storage_key = "token"   # localStorage key written by the login page
//! login_path = "/login"   # where to send the user without a session
//!
//! [queries]
//! module_path = "/bahrain/bh-module"   # event path experience is summed over
//! recent_limit = 5                      # rows in the recent-activity list
//! ```
//!
//! Every field has a default, so a missing or empty file is the production
//! configuration.

use serde::{Deserialize, Serialize};

use crate::ApiError;

pub const DEFAULT_ENDPOINT: &str = "https://learn.reboot01.com/api/graphql-engine/v1/graphql";

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub queries: QueryConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint every query is posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key holding the bearer token.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Path to navigate to when there is no session.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Event path the experience aggregate is restricted to.
    #[serde(default = "default_module_path")]
    pub module_path: String,
    /// Number of transactions shown under recent activity.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_storage_key() -> String {
    store::DEFAULT_TOKEN_KEY.to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_module_path() -> String {
    "/bahrain/bh-module".to_string()
}

fn default_recent_limit() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_path: default_login_path(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            module_path: default_module_path(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ApiError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, logging and falling back to defaults when the file is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::error!("Ignoring {}: {}", Self::filename(), e);
            Self::default()
        })
    }
}
