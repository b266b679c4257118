//! Session token persistence.
//!
//! The dashboard never owns the login flow: an external page writes the bearer
//! token into browser storage and this crate only reads it back (on every
//! request) or clears it (on logout). Storage sits behind [`TokenStore`] so the
//! rest of the workspace can run against [`MemoryTokenStore`] in tests and on
//! native targets.

mod error;
pub use error::StoreError;

pub mod token;
pub use token::TokenStore;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokenStore;

/// Storage key used when the configuration does not name one.
pub const DEFAULT_TOKEN_KEY: &str = "token";
