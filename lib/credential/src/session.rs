//! Provider session type.
//!
//! A session is the provider's proof of a completed authentication. It is a
//! transient, in-memory value: the reconciliation engine holds at most one,
//! and it is consumed by revocation.

use chrono::{DateTime, Utc};
use rosterkit_core::Email;

/// An authenticated session issued by the credential provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    /// Provider-assigned opaque user id.
    uid: String,
    /// The email the provider asserts for this session.
    email: Email,
    /// Display name the provider has on record, if any.
    display_name: Option<String>,
    /// When the session was issued.
    issued_at: DateTime<Utc>,
}

impl ProviderSession {
    /// Creates a session issued now.
    #[must_use]
    pub fn new(uid: impl Into<String>, email: Email) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
            issued_at: Utc::now(),
        }
    }

    /// Attaches the provider-side display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Returns the provider-assigned user id.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the email the provider asserts for this session.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the provider-side display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns when the session was issued.
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
