//! # API crate — GraphQL client for the student dashboard
//!
//! Everything the dashboard needs to talk to the school platform's GraphQL
//! endpoint lives here. The crate has no UI code; the `dashboard` crate turns
//! the typed results into view models and the `ui` crate draws them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`GraphqlClient`] plus the [`Transport`] seam and its reqwest-backed [`HttpTransport`] |
//! | [`queries`] | The six query documents the dashboard sends |
//! | [`fetch`] | Typed fetchers (`user_id`, `user_details`, `audit`, `experience`, `skills`, `recent_projects`) |
//! | [`models`] | Response rows (`UserProfile`, `AuditInfo`, `SkillTransaction`, `RecentTransaction`) and the GraphQL envelope |
//! | [`config`] | `dashboard.toml` configuration (endpoint, storage key, login path, query tuning) |
//! | [`error`] | [`ApiError`] |
//!
//! ## Request shape
//!
//! Every call is one `POST {endpoint}` with `Authorization: Bearer {token}`,
//! `Content-Type: application/json` and a `{"query": "..."}` body. The token is
//! read from the [`store::TokenStore`] on every call. There is no retry,
//! timeout or backoff: a failed request surfaces as an [`ApiError`] and the
//! caller decides what to do with it.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod queries;

pub use client::{GraphqlClient, GraphqlRequest, HttpTransport, Transport};
pub use config::DashboardConfig;
pub use error::ApiError;
pub use models::{
    AuditInfo, RecentTransaction, SkillTransaction, TransactionObject, UserProfile,
};
