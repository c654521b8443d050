//! The directory client trait.
//!
//! The reconciliation engine depends on this trait rather than on a concrete
//! transport, which is what allows the login flow to be exercised against
//! in-memory directories in tests.

use crate::error::DirectoryError;
use crate::types::{BootstrapCredential, Identity};
use async_trait::async_trait;
use rosterkit_core::Email;

/// Read-only client to the authoritative employee directory.
///
/// All operations are free of side effects; the directory is never mutated
/// through this interface.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Checks whether the directory recognizes an email address.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`]; only `Transient` failures are worth
    /// retrying.
    async fn exists(&self, email: &Email) -> Result<bool, DirectoryError>;

    /// Fetches the full identity record for an email address.
    ///
    /// Returns `Ok(None)` when the directory has no record for the address.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] if the lookup itself fails.
    async fn fetch_identity(&self, email: &Email) -> Result<Option<Identity>, DirectoryError>;

    /// Fetches the provisioning credential for a not-yet-created account.
    ///
    /// Returns `Ok(None)` when the directory considers the account already
    /// provisioned (or its password changed). For an unprovisioned account
    /// the returned default password is stable across repeated calls and
    /// equals what the directory would use to provision the email fresh.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] if the lookup itself fails.
    async fn fetch_bootstrap_credential(
        &self,
        email: &Email,
    ) -> Result<Option<BootstrapCredential>, DirectoryError>;
}
