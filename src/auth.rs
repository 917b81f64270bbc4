//! # Identity
//!
//! Sign-in itself belongs to an external provider behind [`IdentityProvider`].
//! The shop only needs to know whether someone is signed in, and who, to show
//! them their own orders. [`SessionGate`] holds that answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please sign in to view your orders")]
    SignedOut,
    #[error("Sign-in failed: {0}")]
    SignInFailed(String),
    #[error("Sign-out failed: {0}")]
    SignOutFailed(String),
}

/// External identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self) -> Result<Session, AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

/// Tracks the current session. Owned by whoever drives the UI; not shared.
#[derive(Debug, Default)]
pub struct SessionGate {
    session: Option<Session>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in<P>(&mut self, provider: &P) -> Result<&Session, AuthError>
    where
        P: IdentityProvider + ?Sized,
    {
        let session = provider.sign_in().await?;
        info!(user_id = %session.user_id, "Signed in");
        Ok(self.session.insert(session))
    }

    /// Signing out with no session is a no-op. The session is kept if the provider fails.
    pub async fn sign_out<P>(&mut self, provider: &P) -> Result<(), AuthError>
    where
        P: IdentityProvider + ?Sized,
    {
        if let Some(session) = &self.session {
            provider.sign_out(session).await?;
            info!(user_id = %session.user_id, "Signed out");
        }
        self.session = None;
        Ok(())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// The session, or [`AuthError::SignedOut`].
    pub fn require(&self) -> Result<&Session, AuthError> {
        self.session.as_ref().ok_or(AuthError::SignedOut)
    }
}

/// Always signs in as the same account.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    session: Session,
}

impl StaticIdentity {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn sign_in(&self) -> Result<Session, AuthError> {
        Ok(self.session.clone())
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        Ok(())
    }
}
