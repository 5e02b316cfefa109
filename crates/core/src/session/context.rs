//! Injectable credential slot

use std::fmt;
use std::sync::Arc;

use labelprint_domain::constants::TOKEN_STORAGE_KEY;
use labelprint_domain::Result;

use super::ports::KeyValueStore;

/// Owns the bearer credential for one gateway client
///
/// Cheap to clone; clones share the underlying store. Writes happen on
/// login, logout and 401 only.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionContext {
    /// Credential stored under the well-known `token` key.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, TOKEN_STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Current credential. An empty stored value counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.key).filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// # Errors
    /// Propagates storage failures.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.store.set(&self.key, token)
    }

    /// # Errors
    /// Propagates storage failures.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }

    /// Backing store, shared with other consumers such as settings.
    #[must_use]
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("key", &self.key)
            .field("has_token", &self.has_token())
            .finish()
    }
}
