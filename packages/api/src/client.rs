//! # GraphQL client
//!
//! [`GraphqlClient`] owns three things: the endpoint URL, a [`Transport`] that
//! performs the POST, and a [`TokenStore`] it reads the bearer token from on
//! every call. Nothing is cached between calls.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::TokenStore;

use crate::models::GraphqlResponse;
use crate::ApiError;

/// JSON body of a GraphQL request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
}

/// Performs a single authenticated POST and returns the decoded JSON body.
pub trait Transport {
    fn post(
        &self,
        endpoint: &str,
        token: &str,
        request: &GraphqlRequest<'_>,
    ) -> impl Future<Output = Result<Value, ApiError>>;
}

/// reqwest-backed transport. On wasm32 reqwest goes through the browser's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post(
        &self,
        endpoint: &str,
        token: &str,
        request: &GraphqlRequest<'_>,
    ) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Client for the dashboard's GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphqlClient<T, S> {
    endpoint: String,
    transport: T,
    tokens: S,
}

impl<S: TokenStore> GraphqlClient<HttpTransport, S> {
    /// Client that talks HTTP to `endpoint`.
    pub fn http(endpoint: impl Into<String>, tokens: S) -> Self {
        Self::new(endpoint, HttpTransport::new(), tokens)
    }
}

impl<T: Transport, S: TokenStore> GraphqlClient<T, S> {
    pub fn new(endpoint: impl Into<String>, transport: T, tokens: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Send `query` and return the raw JSON body.
    pub async fn query(&self, query: &str) -> Result<Value, ApiError> {
        let token = self.tokens.token()?.ok_or(ApiError::MissingToken)?;
        tracing::debug!(endpoint = %self.endpoint, "posting graphql query");
        self.transport
            .post(&self.endpoint, &token, &GraphqlRequest { query })
            .await
    }

    /// Send `query` and decode its `data` member into `D`.
    pub async fn query_data<D: DeserializeOwned>(&self, query: &str) -> Result<D, ApiError> {
        let body = self.query(query).await?;
        let response: GraphqlResponse<D> = serde_json::from_value(body)?;
        response.into_data()
    }
}
