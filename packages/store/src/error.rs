use thiserror::Error;

/// Failure to reach or use the token storage backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// No storage is available (no `window`, storage disabled by the browser).
    #[error("token storage unavailable")]
    Unavailable,
    /// The backend rejected the operation.
    #[error("token storage error: {0}")]
    Backend(String),
}
