use serde::{Deserialize, Serialize};

use super::whole_number;

/// One `skill_*` transaction; `type` is the skill label, `amount` the level gained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTransaction {
    pub r#type: String,
    #[serde(deserialize_with = "whole_number")]
    pub amount: u64,
}

/// Object a transaction was recorded against (project, exercise, piscine...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionObject {
    pub r#type: String,
    pub name: String,
}

/// One row of the recent-activity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub object: TransactionObject,
}
