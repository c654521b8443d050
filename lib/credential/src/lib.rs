//! Abstraction over the external credential provider.
//!
//! The provider is the only system that can verify a password or issue a
//! session; the employee directory knows nothing about authentication state.
//! This crate defines:
//! - the [`CredentialProvider`] trait (sign-in, account creation,
//!   display-name update, password-reset dispatch, session revocation,
//!   federated sign-in)
//! - [`ProviderSession`], the transient proof of a completed authentication
//! - [`AuthProviderError`], the closed classification of provider failures,
//!   built from raw provider codes exactly once at this boundary

pub mod error;
pub mod provider;
pub mod session;

// Re-export main types at crate root
pub use error::{AuthProviderError, AuthProviderErrorKind};
pub use provider::{CredentialProvider, FederatedProvider};
pub use session::ProviderSession;
