//! User session service - login, logout, restore

use std::sync::Arc;

use labelprint_domain::{LabelPrintError, LoginRequest, User};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info};

use super::context::SessionContext;
use super::ports::AuthGateway;
use crate::gateway::error::ClassifiedError;

/// Failures of session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Gateway(#[from] ClassifiedError),

    #[error(transparent)]
    Storage(#[from] LabelPrintError),
}

/// Signed-in user plus the credential slot
pub struct SessionService {
    auth: Arc<dyn AuthGateway>,
    session: SessionContext,
    current_user: RwLock<Option<User>>,
}

impl SessionService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthGateway>, session: SessionContext) -> Self {
        Self { auth, session, current_user: RwLock::new(None) }
    }

    /// Authenticate and persist the returned token.
    ///
    /// # Errors
    /// `SessionError::Gateway` when the login call fails, `Storage` when the
    /// token cannot be persisted. On error the session is left unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, SessionError> {
        let request =
            LoginRequest { username: username.to_string(), password: password.to_string() };
        let response = self.auth.login(&request).await?;

        self.session.set_token(&response.token)?;
        *self.current_user.write() = Some(response.user.clone());

        info!(username = %response.user.username, "user signed in");
        Ok(response.user)
    }

    /// Forget the user and the stored credential.
    ///
    /// # Errors
    /// Propagates storage failures; the in-memory user is cleared regardless.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.current_user.write().take();
        self.session.clear()?;
        info!("user signed out");
        Ok(())
    }

    /// Restore a credential persisted by an earlier run.
    ///
    /// Returns `true` if a token was found. The user profile is not fetched.
    pub fn initialize(&self) -> bool {
        let restored = self.session.has_token();
        debug!(restored, "session initialized from storage");
        restored
    }

    /// Both a user and a credential are required; a 401 that clears the
    /// credential therefore ends the session.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user.read().is_some() && self.session.has_token()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current_user.read().clone()
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}
