//! # Browser `localStorage` token store
//!
//! [`LocalTokenStore`] is the [`TokenStore`] used on the web platform. It looks
//! up `window.localStorage` on every call rather than holding the handle, which
//! keeps the struct `Clone` and cheap to pass into components.

use crate::token::TokenStore;
use crate::{StoreError, DEFAULT_TOKEN_KEY};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// localStorage-backed TokenStore for web platform.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }
}

impl LocalTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(backend)?
            .ok_or(StoreError::Unavailable)
    }
}

fn backend(err: JsValue) -> StoreError {
    StoreError::Backend(format!("{err:?}"))
}

impl TokenStore for LocalTokenStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(&self.key).map_err(backend)
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(&self.key, token).map_err(backend)
    }

    fn clear(&self) -> Result<(), StoreError> {
        tracing::debug!(key = %self.key, "removing session token");
        self.storage()?.remove_item(&self.key).map_err(backend)
    }
}
