//! The credential provider trait.
//!
//! The external authentication service verifies passwords and issues
//! sessions. The reconciliation engine depends on this trait; concrete
//! implementations live with the embedding application, and tests use
//! in-memory fakes.

use crate::error::AuthProviderError;
use crate::session::ProviderSession;
use async_trait::async_trait;
use rosterkit_core::Email;
use serde::{Deserialize, Serialize};

/// Reference to a provider-mediated (federated) sign-in method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedProvider {
    /// Provider identifier, e.g. `"google.com"`.
    id: String,
}

impl FederatedProvider {
    /// Creates a reference to a federated provider by its identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The Google federated provider.
    #[must_use]
    pub fn google() -> Self {
        Self::new("google.com")
    }

    /// Returns the provider identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for FederatedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Abstraction over the external authentication service.
///
/// Errors carry the provider's classification; see
/// [`AuthProviderError::kind`] for the vocabulary each operation can
/// produce.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Verifies a password and issues a session.
    ///
    /// # Errors
    ///
    /// `InvalidOrUnknownCredential` covers both a missing account and a
    /// wrong password; the provider does not disclose which. Also
    /// `RateLimited` and `Other`.
    async fn sign_in(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<ProviderSession, AuthProviderError>;

    /// Creates an account and issues a session for it.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` when the email is already registered, `WeakPassword`
    /// when the initial password violates provider policy, `Other` for the
    /// rest.
    async fn create_account(
        &self,
        email: &Email,
        initial_password: &str,
    ) -> Result<ProviderSession, AuthProviderError>;

    /// Updates the display name on the account behind a session.
    ///
    /// # Errors
    ///
    /// Returns the provider's failure; callers decide whether the update is
    /// load-bearing.
    async fn update_display_name(
        &self,
        session: &ProviderSession,
        name: &str,
    ) -> Result<(), AuthProviderError>;

    /// Dispatches a password-reset email.
    ///
    /// # Errors
    ///
    /// `RateLimited` or `Other`.
    async fn send_password_reset(&self, email: &Email) -> Result<(), AuthProviderError>;

    /// Revokes a session. Best-effort: revocation failures are swallowed by
    /// the implementation, a revoked-or-gone session is equally dead.
    async fn revoke_session(&self, session: ProviderSession);

    /// Runs a provider-mediated sign-in flow and issues a session for the
    /// federated identity.
    ///
    /// # Errors
    ///
    /// `Cancelled` when the user aborts the flow, `Other` for the rest.
    async fn federated_sign_in(
        &self,
        provider: &FederatedProvider,
    ) -> Result<ProviderSession, AuthProviderError>;
}
