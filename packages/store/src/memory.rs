use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::token::TokenStore;
use crate::{StoreError, DEFAULT_TOKEN_KEY};

/// In-memory TokenStore for testing and native fallback.
///
/// Clones share the same backing map, so a test can hand one clone to a client
/// and rotate or clear the token through another.
#[derive(Clone, Debug)]
pub struct MemoryTokenStore {
    key: String,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Convenience constructor for a store that already holds a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(store.key.clone(), token.to_string());
        store
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(&self.key).cloned())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        self.entries()?.insert(self.key.clone(), token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.entries()?.remove(&self.key);
        Ok(())
    }
}
