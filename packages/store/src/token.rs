//! # Token store trait
//!
//! A [`TokenStore`] holds exactly one string under one key. Implementations are
//! synchronous because the browser's `localStorage` is synchronous; callers read
//! through the store every time they need the token so a token rotated by the
//! login page is picked up on the next request.

use crate::StoreError;

/// Storage for the session bearer token.
pub trait TokenStore {
    /// The key this store reads and writes.
    fn key(&self) -> &str;

    /// Raw stored value, if any.
    fn get(&self) -> Result<Option<String>, StoreError>;

    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), StoreError>;

    /// The stored token, treating an empty or blank value as absent.
    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .get()?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn get(&self) -> Result<Option<String>, StoreError> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        (**self).set(token)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
