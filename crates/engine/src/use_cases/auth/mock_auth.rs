//! Simulated sign-in.
//!
//! There is no identity provider. Signing in with a provider picks that
//! provider's canned user after a short artificial delay and remembers it in
//! key/value storage so the session survives a restart.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;

use spellbook_domain::{AuthProvider, User};

use crate::infrastructure::ports::{StorageError, StoragePort};

/// Storage key holding the signed-in user as JSON.
pub const SESSION_KEY: &str = "mockUser";

/// Artificial latency applied to sign-in and sign-out.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to serialize session: {0}")]
    Serialization(String),
}

/// Holds the current mock session.
pub struct MockAuth {
    storage: Arc<dyn StoragePort>,
    delay: Duration,
    current: RwLock<Option<User>>,
}

impl MockAuth {
    pub fn with_delay(storage: Arc<dyn StoragePort>, delay: Duration) -> Self {
        Self {
            storage,
            delay,
            current: RwLock::new(None),
        }
    }

    /// Pick up a session persisted by an earlier run.
    ///
    /// Unparseable data is dropped from storage and the session starts
    /// signed out.
    pub async fn restore(&self) -> Result<Option<User>, AuthError> {
        let Some(raw) = self.storage.load(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Restored session");
                *self.current.write().await = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored session");
                self.storage.remove(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    /// Sign in as the provider's canned user.
    ///
    /// The session only changes once it has been persisted. The session lock
    /// is held across the write so storage and memory agree.
    pub async fn sign_in(&self, provider: AuthProvider) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;

        let user = provider.mock_user();
        let json =
            serde_json::to_string(&user).map_err(|e| AuthError::Serialization(e.to_string()))?;

        let mut current = self.current.write().await;
        self.storage.save(SESSION_KEY, &json)?;
        *current = Some(user.clone());
        tracing::info!(user_id = %user.id, %provider, "Signed in");
        Ok(user)
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;

        let mut current = self.current.write().await;
        self.storage.remove(SESSION_KEY)?;
        if let Some(user) = current.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }
}
