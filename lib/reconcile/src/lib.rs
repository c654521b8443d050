//! Login reconciliation for the rosterkit staff portal.
//!
//! Two external systems hold half of the login story each: the employee
//! directory decides who belongs to the organization, the credential
//! provider decides who can prove their identity. This crate joins them:
//!
//! - [`ReconciliationEngine`] drives a login attempt through the directory
//!   gate, the provider sign-in, and, when the provider's ambiguous
//!   "invalid credential" signal warrants it, just-in-time account
//!   provisioning keyed off the directory's default credential.
//! - [`SessionCache`] keeps the last resolved identity for display purposes
//!   and the provider session for logout-time revocation.
//! - [`LoginError`] is the closed taxonomy every failure is classified into
//!   before it reaches the caller.

pub mod cache;
pub mod engine;
pub mod error;

// Re-export main types at crate root
pub use cache::SessionCache;
pub use engine::ReconciliationEngine;
pub use error::LoginError;
