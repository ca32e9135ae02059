//! Authentication port.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::{ApiService, SignUpRequest};
use crate::session::{LoginKind, SecureString, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCredentials {
    pub email: String,
    pub username: String,
    pub password: SecureString,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authentication cancelled")]
    Cancelled,

    #[error("Authentication failed: {0}")]
    Failed(String),

    #[error("No auth provider for {0:?} accounts")]
    Unsupported(LoginKind),
}

/// Sign-up, login and logout against the identity providers.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an email account and log into it.
    async fn register_with_email(&self, credentials: AuthCredentials) -> Result<User, AuthError>;

    /// End the provider-side session for `kind`.
    async fn logout(&self, kind: LoginKind) -> Result<(), AuthError>;
}

/// Email accounts, registered through the API.
///
/// Email sessions only live in the user store, so logout has nothing to
/// revoke remotely. Other kinds belong to their SDK-backed providers.
pub struct EmailAuthProvider {
    api: Arc<dyn ApiService>,
}

impl EmailAuthProvider {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthProvider for EmailAuthProvider {
    async fn register_with_email(&self, credentials: AuthCredentials) -> Result<User, AuthError> {
        let request = SignUpRequest {
            email: credentials.email,
            username: credentials.username,
            password: credentials.password,
        };
        self.api
            .register_email(request)
            .await
            .map_err(|e| AuthError::Failed(e.to_string()))
    }

    async fn logout(&self, kind: LoginKind) -> Result<(), AuthError> {
        match kind {
            LoginKind::Email => Ok(()),
            other => Err(AuthError::Unsupported(other)),
        }
    }
}
