use serde::{Deserialize, Serialize};

use super::{optional_whole_number, RecentTransaction, SkillTransaction};
use crate::ApiError;

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphqlErrorExtensions>,
}

/// Server-specific error details; only the machine-readable code is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

impl GraphqlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<D> GraphqlResponse<D> {
    /// The `data` member, or the reported errors when there are any.
    pub fn into_data(self) -> Result<D, ApiError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            let code = self.errors.iter().find_map(|e| e.code()).map(str::to_string);
            return Err(ApiError::GraphQl {
                message: messages.join("; "),
                code,
            });
        }
        self.data.ok_or(ApiError::MissingField("data"))
    }
}

/// `{ user: [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct UsersData<T> {
    #[serde(default = "Vec::new")]
    pub user: Vec<T>,
}

impl<T> UsersData<T> {
    /// The platform scopes `user` to the token's owner, so index 0 is the caller.
    pub fn into_first(self) -> Result<T, ApiError> {
        self.user.into_iter().next().ok_or(ApiError::MissingField("user[0]"))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserIdRow {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillsRow {
    #[serde(default)]
    pub transactions: Vec<SkillTransaction>,
}

pub(crate) type SkillsData = UsersData<SkillsRow>;

/// `{ transaction: [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct TransactionsData {
    #[serde(default)]
    pub transaction: Vec<RecentTransaction>,
}

/// `{ transaction_aggregate: { aggregate: { sum: { amount } } } }`
#[derive(Debug, Deserialize)]
pub(crate) struct ExperienceData {
    pub transaction_aggregate: Aggregate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Aggregate {
    #[serde(default)]
    pub aggregate: Option<AggregateFields>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AggregateFields {
    #[serde(default)]
    pub sum: Option<SumFields>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SumFields {
    #[serde(default, deserialize_with = "optional_whole_number")]
    pub amount: Option<u64>,
}

impl ExperienceData {
    /// Summed amount; an empty aggregate (no transactions) is zero.
    pub fn total(&self) -> u64 {
        self.transaction_aggregate
            .aggregate
            .as_ref()
            .and_then(|a| a.sum.as_ref())
            .and_then(|s| s.amount)
            .unwrap_or(0)
    }
}
