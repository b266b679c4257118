use thiserror::Error;

/// Everything that can go wrong between reading the token and decoding a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, CORS, connection reset).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered 200 but the GraphQL layer reported errors.
    /// `code` is the first `extensions.code` the server attached, if any.
    #[error("graphql error: {message}")]
    GraphQl { message: String, code: Option<String> },

    /// The body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response decoded but a required row was absent (e.g. an empty `user` array).
    #[error("response is missing {0}")]
    MissingField(&'static str),

    /// No session token is stored.
    #[error("no session token in storage")]
    MissingToken,

    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// GraphQL error codes the graphql-engine uses for a missing, malformed or expired JWT.
const UNAUTHORIZED_CODES: &[&str] = &["invalid-jwt", "invalid-headers"];

impl ApiError {
    /// Whether this error means the session is gone and the user should sign in again.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ApiError::MissingToken => true,
            ApiError::Status { status, .. } => *status == 401 || *status == 403,
            ApiError::GraphQl { code: Some(code), .. } => UNAUTHORIZED_CODES.contains(&code.as_str()),
            _ => false,
        }
    }
}
