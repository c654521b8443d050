//! The login error taxonomy.
//!
//! Every failure of the reconciliation engine reaches the caller as one of
//! these values. Classification happens exactly once, at the engine
//! boundary; raw directory or provider errors never travel further up.

use std::fmt;

/// Classified outcome of a failed login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The directory does not recognize the email. No account is ever
    /// created for an unrecognized address.
    NotRegistered,
    /// The directory marks the employee inactive. Any session issued during
    /// the attempt has been revoked.
    AccountInactive,
    /// The password is wrong for an existing account.
    WrongPassword,
    /// A concurrent login provisioned this account first. The credentials
    /// may well be correct: one fresh sign-in retry by the caller is the
    /// recommended response.
    RaceLoss,
    /// First-time provisioning failed in a way that needs administrative
    /// intervention.
    ProvisioningError { reason: String },
    /// The provider is throttling attempts.
    TooManyAttempts,
    /// The user aborted a provider-mediated sign-in flow.
    Cancelled,
    /// A failure outside the known vocabulary of either external system.
    UnknownAuthError { detail: String },
    /// A transient network failure reaching the directory or the provider.
    NetworkError { reason: String },
}

impl LoginError {
    /// The stable user-facing message for this outcome.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotRegistered => "Your email is not registered in the system. Contact HR.",
            Self::AccountInactive => "Your account is inactive. Contact HR.",
            Self::WrongPassword => "Incorrect password.",
            Self::RaceLoss => "Sign-in was interrupted. Please try again.",
            Self::ProvisioningError { .. } => "Your account could not be set up. Contact HR.",
            Self::TooManyAttempts => "Too many attempts. Try again later.",
            Self::Cancelled => "Sign-in was cancelled.",
            Self::UnknownAuthError { .. } => "Sign-in failed because of an unexpected error.",
            Self::NetworkError { .. } => "Connection problem. Check your network and try again.",
        }
    }

    /// True for the outcomes where asking the user to simply try again is
    /// appropriate.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::TooManyAttempts)
    }

    /// True for the outcomes that can only be fixed by an administrator.
    #[must_use]
    pub fn needs_administrator(&self) -> bool {
        matches!(self, Self::NotRegistered | Self::ProvisioningError { .. })
    }

    /// True when the caller should silently retry sign-in once before
    /// surfacing anything to the user. Only a provisioning race qualifies.
    #[must_use]
    pub fn retry_sign_in_recommended(&self) -> bool {
        matches!(self, Self::RaceLoss)
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "email not registered in the directory"),
            Self::AccountInactive => write!(f, "account is inactive"),
            Self::WrongPassword => write!(f, "wrong password"),
            Self::RaceLoss => write!(f, "lost a concurrent provisioning race"),
            Self::ProvisioningError { reason } => {
                write!(f, "account provisioning failed: {reason}")
            }
            Self::TooManyAttempts => write!(f, "too many attempts"),
            Self::Cancelled => write!(f, "sign-in cancelled by the user"),
            Self::UnknownAuthError { detail } => {
                write!(f, "unclassified authentication failure: {detail}")
            }
            Self::NetworkError { reason } => write!(f, "network failure: {reason}"),
        }
    }
}

impl std::error::Error for LoginError {}
