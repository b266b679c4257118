//! # Response models
//!
//! Rows are decoded with serde straight from the GraphQL `data` member. Field
//! names follow the platform's camelCase schema.
//!
//! | Type | Query |
//! |------|-------|
//! | [`UserProfile`] | user details |
//! | [`AuditInfo`] | audit ratio and up/down byte totals |
//! | [`SkillTransaction`] | `skill_*` transactions on the current user |
//! | [`RecentTransaction`] | latest XP transactions with their object |
//!
//! Amounts arrive as JSON numbers that may be integers or floats depending on
//! the column type, so they go through [`whole_number`].

mod response;
mod transaction;
mod user;

pub use response::{GraphqlError, GraphqlErrorExtensions, GraphqlResponse};
pub(crate) use response::{ExperienceData, SkillsData, TransactionsData, UserIdRow, UsersData};
pub use transaction::{RecentTransaction, SkillTransaction, TransactionObject};
pub use user::{AuditInfo, UserProfile};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Accept any non-negative JSON number and round it to a `u64`.
///
/// Rounding happens here, before any display formatting: a `totalUp` of
/// `999999.6` becomes `1_000_000` and is shown as `1.00 MB`, not `1000 kB`.
/// Byte totals are whole numbers on the platform, so only float-typed columns
/// with a fractional part are affected.
pub(crate) fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        })
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative amount, got {number}")))
}

/// Like [`whole_number`] but `null` maps to `None`.
pub(crate) fn optional_whole_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "whole_number")] u64);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(n)| n))
}
