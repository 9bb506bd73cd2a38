//! Admin session flag.
//!
//! This is a placeholder gate: any non-empty identifier and secret are
//! accepted, nothing is verified and the session never expires.

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::store::PersistedStore;

/// Admin session operations bound to a store.
pub struct AuthGate<'a> {
    store: &'a PersistedStore,
}

impl<'a> AuthGate<'a> {
    pub fn new(store: &'a PersistedStore) -> Self {
        Self { store }
    }

    /// Start an admin session if both arguments are non-empty.
    ///
    /// Returns `false` and leaves the flag untouched otherwise.
    pub fn login(&self, identifier: &str, secret: &str) -> bool {
        if identifier.is_empty() || secret.is_empty() {
            tracing::debug!("login rejected: empty identifier or secret");
            return false;
        }
        self.store.write_raw(config::AUTH_KEY, config::AUTH_TRUE);
        tracing::info!("admin session started");
        true
    }

    pub fn logout(&self) {
        self.store.remove(config::AUTH_KEY);
        tracing::info!("admin session ended");
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read_raw(config::AUTH_KEY).as_deref() == Some(config::AUTH_TRUE)
    }

    /// Fail with [`StorefrontError::Unauthorized`] unless a session is active.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(StorefrontError::Unauthorized)
        }
    }
}
