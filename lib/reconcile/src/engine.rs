//! The reconciliation engine.
//!
//! The engine turns `(email, password)` into a resolved [`Identity`] or a
//! classified [`LoginError`] by reconciling two external systems that do not
//! know about each other: the employee directory (who is allowed in) and the
//! credential provider (who can prove who they are).
//!
//! A login attempt moves through a fixed sequence of gates:
//!
//! 1. **Directory gate**: unknown email, terminal `NotRegistered`. No
//!    account is ever created for an email the directory does not recognize.
//! 2. **Sign-in**: the provider verifies the password. Success resolves the
//!    identity; a throttle or unclassified failure is terminal.
//! 3. **Disambiguation**: the provider reports "no such account" and
//!    "wrong password" as one signal. The directory's provisioning
//!    credential is the oracle that splits them: if the presented password
//!    equals the known default, the account has simply never been created,
//!    and the engine provisions it just-in-time. Anything else is a wrong
//!    password on an existing account.
//! 4. **Resolution**: the identity is fetched fresh, the activation gate is
//!    applied (inactive accounts get their session revoked), and the result
//!    is cached.
//!
//! Concurrent attempts for the same email are not serialized. Two calls can
//! both pass sign-in failure before either provisions; the provider accepts
//! exactly one `create_account`, and the loser surfaces [`LoginError::RaceLoss`].

use crate::cache::SessionCache;
use crate::error::LoginError;
use rosterkit_core::Email;
use rosterkit_credential::{
    AuthProviderError, AuthProviderErrorKind, CredentialProvider, FederatedProvider,
    ProviderSession,
};
use rosterkit_directory::{DirectoryClient, DirectoryError, Identity};
use tracing::{debug, instrument, warn};

/// Reconciles the employee directory and the credential provider into a
/// single login outcome.
///
/// The engine holds no lock around the flow and never retries on its own;
/// every call is a strictly sequential chain of network operations that runs
/// to a terminal outcome.
pub struct ReconciliationEngine<D, P> {
    directory: D,
    provider: P,
    cache: SessionCache,
}

impl<D, P> ReconciliationEngine<D, P>
where
    D: DirectoryClient,
    P: CredentialProvider,
{
    /// Creates an engine over the given collaborators.
    #[must_use]
    pub fn new(directory: D, provider: P) -> Self {
        Self {
            directory,
            provider,
            cache: SessionCache::new(),
        }
    }

    /// Returns the session cache for read access by the embedder.
    #[must_use]
    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Authenticates with email and password, provisioning the account
    /// just-in-time when the directory's default credential is presented for
    /// a not-yet-created account.
    ///
    /// # Errors
    ///
    /// Returns one value of the closed [`LoginError`] taxonomy; raw
    /// directory or provider errors never escape.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn authenticate(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Identity, LoginError> {
        self.check_directory(email).await?;

        match self.provider.sign_in(email, password).await {
            Ok(session) => {
                debug!("provider sign-in succeeded");
                self.resolve_session(session, false, Some(password)).await
            }
            Err(err) if err.kind() == AuthProviderErrorKind::InvalidOrUnknownCredential => {
                debug!(
                    code = err.raw_code(),
                    "ambiguous credential failure, consulting directory oracle"
                );
                self.provision(email, password).await
            }
            Err(err) => Err(Self::classify_provider(err)),
        }
    }

    /// Authenticates through a provider-mediated (federated) flow.
    ///
    /// The federated flow supplies no password, so no oracle exists to
    /// disambiguate a missing account: this entry point never provisions.
    /// The directory gate still applies to the asserted email; a session
    /// issued for an unregistered address is revoked before the outcome
    /// surfaces.
    ///
    /// # Errors
    ///
    /// Returns one value of the closed [`LoginError`] taxonomy.
    #[instrument(skip(self), fields(provider = %provider))]
    pub async fn federated_authenticate(
        &self,
        provider: &FederatedProvider,
    ) -> Result<Identity, LoginError> {
        let session = self
            .provider
            .federated_sign_in(provider)
            .await
            .map_err(Self::classify_provider)?;

        match self.directory.exists(session.email()).await {
            Ok(true) => {}
            Ok(false) => {
                debug!("federated identity not present in the directory");
                self.provider.revoke_session(session).await;
                return Err(LoginError::NotRegistered);
            }
            Err(err) => {
                self.provider.revoke_session(session).await;
                return Err(Self::classify_directory(err));
            }
        }

        self.resolve_session(session, false, None).await
    }

    /// Dispatches a password-reset email for a directory-registered address.
    ///
    /// # Errors
    ///
    /// [`LoginError::NotRegistered`] when the directory does not recognize
    /// the email; otherwise the classified provider failure, if any.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn request_password_reset(&self, email: &Email) -> Result<(), LoginError> {
        self.check_directory(email).await?;

        self.provider
            .send_password_reset(email)
            .await
            .map_err(Self::classify_provider)?;
        debug!("password reset dispatched");
        Ok(())
    }

    /// Ends the cached session: empties the cache and best-effort revokes
    /// the provider session it held.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        if let Some(session) = self.cache.clear().await {
            debug!("revoking provider session on logout");
            self.provider.revoke_session(session).await;
        }
    }

    /// The directory gate: unknown emails terminate the flow before any
    /// provider call is made.
    async fn check_directory(&self, email: &Email) -> Result<(), LoginError> {
        let exists = self
            .directory
            .exists(email)
            .await
            .map_err(Self::classify_directory)?;

        if !exists {
            debug!("directory does not recognize the email");
            return Err(LoginError::NotRegistered);
        }
        Ok(())
    }

    /// The disambiguation branch: decides whether an ambiguous sign-in
    /// failure means "account not yet created" and provisions it if so.
    async fn provision(&self, email: &Email, password: &str) -> Result<Identity, LoginError> {
        let bootstrap = self
            .directory
            .fetch_bootstrap_credential(email)
            .await
            .map_err(Self::classify_directory)?;

        let Some(bootstrap) = bootstrap else {
            // Already provisioned as far as the directory is concerned; a
            // sign-in failure can only mean a mistyped password.
            return Err(LoginError::WrongPassword);
        };

        if password != bootstrap.default_password {
            // The only password that can legitimately trigger first-time
            // provisioning is the known default.
            return Err(LoginError::WrongPassword);
        }

        let session = match self
            .provider
            .create_account(email, &bootstrap.default_password)
            .await
        {
            Ok(session) => session,
            Err(err) if err.kind() == AuthProviderErrorKind::AlreadyExists => {
                debug!("account appeared between sign-in and provisioning");
                return Err(LoginError::RaceLoss);
            }
            Err(err) => {
                return Err(LoginError::ProvisioningError {
                    reason: err.to_string(),
                });
            }
        };
        debug!("account provisioned just-in-time");

        if let Err(err) = self
            .provider
            .update_display_name(&session, &bootstrap.display_name)
            .await
        {
            // The account exists and the password is set; a cosmetic write
            // must not strand the user mid-provision.
            warn!(error = %err, "display name update failed after provisioning");
        }

        self.resolve_session(session, true, None).await
    }

    /// The resolution step shared by every successful provider round-trip:
    /// fresh identity fetch, activation gate, password-change flag, cache.
    async fn resolve_session(
        &self,
        session: ProviderSession,
        provisioned: bool,
        password: Option<&str>,
    ) -> Result<Identity, LoginError> {
        let identity = match self.directory.fetch_identity(session.email()).await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                warn!("directory no longer recognizes an email that passed the gate");
                self.provider.revoke_session(session).await;
                return Err(LoginError::NotRegistered);
            }
            Err(err) => {
                self.provider.revoke_session(session).await;
                return Err(Self::classify_directory(err));
            }
        };

        if !identity.is_active {
            debug!("directory marks the employee inactive, revoking session");
            self.provider.revoke_session(session).await;
            self.cache.clear().await;
            return Err(LoginError::AccountInactive);
        }

        let mut identity = identity;
        // The default credential is the employee identifier by policy;
        // signing in with it means the bootstrap password has never been
        // changed.
        identity.requires_password_change =
            provisioned || password.is_some_and(|p| p == identity.employee_id.as_str());

        self.cache.save(identity.clone(), session).await;
        Ok(identity)
    }

    /// Directory failures, classified once at this boundary.
    fn classify_directory(err: DirectoryError) -> LoginError {
        if err.is_retryable() {
            LoginError::NetworkError {
                reason: err.to_string(),
            }
        } else {
            LoginError::UnknownAuthError {
                detail: err.to_string(),
            }
        }
    }

    /// Provider failures outside the flow-specific branches, classified
    /// once at this boundary.
    fn classify_provider(err: AuthProviderError) -> LoginError {
        match err.kind() {
            AuthProviderErrorKind::RateLimited => LoginError::TooManyAttempts,
            AuthProviderErrorKind::Cancelled => LoginError::Cancelled,
            AuthProviderErrorKind::Network => LoginError::NetworkError {
                reason: err.to_string(),
            },
            _ => LoginError::UnknownAuthError {
                detail: err.raw_code().to_string(),
            },
        }
    }
}
