//! Error types for credential provider operations.
//!
//! The provider reports failures as string codes from a fixed vocabulary.
//! Implementations translate those codes into [`AuthProviderError`] exactly
//! once, at the provider boundary; nothing above this crate ever inspects a
//! raw code again.

use std::fmt;

/// Classified kind of a credential provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthProviderErrorKind {
    /// Sign-in failed: either the account does not exist or the password is
    /// wrong. The provider deliberately does not disclose which.
    InvalidOrUnknownCredential,
    /// The provider is throttling attempts for this account or client.
    RateLimited,
    /// Account creation failed because the email is already registered.
    AlreadyExists,
    /// Account creation failed because the password violates provider policy.
    WeakPassword,
    /// The user aborted a provider-mediated sign-in flow.
    Cancelled,
    /// The provider could not be reached.
    Network,
    /// Any provider failure outside the known vocabulary.
    Other,
}

impl AuthProviderErrorKind {
    fn describe(&self) -> &'static str {
        match self {
            Self::InvalidOrUnknownCredential => "invalid or unknown credential",
            Self::RateLimited => "rate limited",
            Self::AlreadyExists => "account already exists",
            Self::WeakPassword => "password rejected by provider policy",
            Self::Cancelled => "sign-in flow cancelled",
            Self::Network => "provider unreachable",
            Self::Other => "unclassified provider failure",
        }
    }
}

impl fmt::Display for AuthProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A classified credential provider failure.
///
/// Carries the raw provider code alongside the classification for logging
/// and diagnostics; callers branch on [`kind`](Self::kind) only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthProviderError {
    kind: AuthProviderErrorKind,
    raw_code: String,
}

impl AuthProviderError {
    /// Creates an error with an explicit classification.
    #[must_use]
    pub fn new(kind: AuthProviderErrorKind, raw_code: impl Into<String>) -> Self {
        Self {
            kind,
            raw_code: raw_code.into(),
        }
    }

    /// Classifies a raw provider error code.
    ///
    /// Codes outside the known vocabulary map to
    /// [`AuthProviderErrorKind::Other`].
    #[must_use]
    pub fn from_code(raw_code: impl Into<String>) -> Self {
        let raw_code = raw_code.into();
        let kind = match raw_code.as_str() {
            "auth/invalid-credential" | "auth/user-not-found" | "auth/wrong-password" => {
                AuthProviderErrorKind::InvalidOrUnknownCredential
            }
            "auth/too-many-requests" => AuthProviderErrorKind::RateLimited,
            "auth/email-already-in-use" => AuthProviderErrorKind::AlreadyExists,
            "auth/weak-password" => AuthProviderErrorKind::WeakPassword,
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" => {
                AuthProviderErrorKind::Cancelled
            }
            "auth/network-request-failed" => AuthProviderErrorKind::Network,
            _ => AuthProviderErrorKind::Other,
        };

        Self { kind, raw_code }
    }

    /// Returns the classification.
    #[must_use]
    pub fn kind(&self) -> AuthProviderErrorKind {
        self.kind
    }

    /// Returns the raw provider code, for diagnostics only.
    #[must_use]
    pub fn raw_code(&self) -> &str {
        &self.raw_code
    }
}

impl fmt::Display for AuthProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.raw_code)
    }
}

impl std::error::Error for AuthProviderError {}
