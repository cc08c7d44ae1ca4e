//! Domain service for gateway logins and session users.

use thiserror::Error;

use crate::domain::UserId;
use crate::models::user::{LoginIdentity, User};

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid gateway key")]
    InvalidGatewayKey,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Accepts an identity verified by the OAuth gateway and upserts the user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidGatewayKey`] unless `gateway_key` matches
    /// the configured, non-empty key.
    async fn login(
        &self,
        gateway_key: Option<&str>,
        identity: LoginIdentity,
    ) -> Result<User, AuthError>;

    /// Loads the user behind a session, if it still exists.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreUnavailable`] when the lookup fails, so that an
    /// outage is not mistaken for a signed-out caller.
    async fn current_user(&self, user_id: UserId) -> Result<Option<User>, AuthError>;
}
