use serde::{Deserialize, Serialize};

use super::whole_number;

/// Profile fields shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub campus: String,
    /// Campus login, displayed as the campus id.
    pub login: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Audit work given (`total_up`) and received (`total_down`), in bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditInfo {
    /// `null` for users who have not audited yet.
    #[serde(default)]
    pub audit_ratio: Option<f64>,
    #[serde(deserialize_with = "whole_number")]
    pub total_up: u64,
    #[serde(deserialize_with = "whole_number")]
    pub total_down: u64,
}
