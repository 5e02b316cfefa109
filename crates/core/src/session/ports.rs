//! Port interfaces for session management
//!
//! These traits define the boundaries between the session logic and the
//! storage and HTTP implementations living in the infra crate.

use async_trait::async_trait;
use labelprint_domain::{LoginRequest, LoginResponse, Result};

use crate::gateway::error::ClassifiedError;

/// Durable, synchronous string key-value store
///
/// A `set` replaces the previous value atomically.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `LabelPrintError::Storage` if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error.
    ///
    /// # Errors
    /// Returns `LabelPrintError::Storage` if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Exchanges user credentials for a session token
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> std::result::Result<LoginResponse, ClassifiedError>;
}
