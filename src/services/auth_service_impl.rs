//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Store;
use crate::domain::UserId;
use crate::models::user::{LoginIdentity, User};
use crate::services::auth_service::{AuthError, AuthService};

const MAX_OPEN_ID_LEN: usize = 64;

pub struct SeaOrmAuthService {
    store: Store,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

/// Compares without short-circuiting on the first differing byte.
fn keys_match(expected: &str, given: &str) -> bool {
    expected.len() == given.len()
        && expected
            .bytes()
            .zip(given.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(
        &self,
        gateway_key: Option<&str>,
        identity: LoginIdentity,
    ) -> Result<User, AuthError> {
        let (expected_key, owner_open_id) = {
            let config = self.config.read().await;
            (
                config.auth.gateway_key.clone(),
                config.auth.owner_open_id.clone(),
            )
        };

        let authorized = match (expected_key.as_deref(), gateway_key) {
            (Some(expected), Some(given)) if !expected.is_empty() => keys_match(expected, given),
            _ => false,
        };
        if !authorized {
            warn!("Rejected login with missing or invalid gateway key");
            return Err(AuthError::InvalidGatewayKey);
        }

        let open_id = identity.open_id.trim();
        if open_id.is_empty() {
            return Err(AuthError::Validation("openId is required".to_string()));
        }
        if open_id.len() > MAX_OPEN_ID_LEN {
            return Err(AuthError::Validation(format!(
                "openId must be {MAX_OPEN_ID_LEN} characters or less"
            )));
        }

        let identity = LoginIdentity {
            open_id: open_id.to_string(),
            ..identity
        };

        let user = self
            .store
            .upsert_login(&identity, owner_open_id.as_deref().filter(|o| !o.is_empty()))
            .await
            .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        info!(user_id = %user.id, role = %user.role, "User signed in");
        Ok(user)
    }

    async fn current_user(&self, user_id: UserId) -> Result<Option<User>, AuthError> {
        self.store
            .get_user(user_id)
            .await
            .map_err(|e| AuthError::StoreUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_key_comparison() {
        assert!(keys_match("secret", "secret"));
        assert!(!keys_match("secret", "secreT"));
        assert!(!keys_match("secret", "secret2"));
        assert!(!keys_match("secret", ""));
    }

    #[tokio::test]
    async fn store_outage_is_not_a_signed_out_user() {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1).await.unwrap();
        let service = SeaOrmAuthService::new(
            store.clone(),
            Arc::new(RwLock::new(Config::default())),
        );
        store.conn.clone().close().await.unwrap();

        let result = service.current_user(UserId::new(1)).await;
        assert!(matches!(result, Err(AuthError::StoreUnavailable(_))));
    }
}
