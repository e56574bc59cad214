//! Session token persistence.
//!
//! DESIGN
//! ======
//! The token is read from the store every time a task call is made instead
//! of being captured once, so pages depend on the [`TokenStore`] seam rather
//! than on a cached value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Where the session token lives between page loads.
pub trait TokenStore {
    /// Current token, if a login has stored one.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    fn set_token(&self, token: &str);
}

/// [`TokenStore`] backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        storage::load(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        storage::save(TOKEN_KEY, token);
    }
}
