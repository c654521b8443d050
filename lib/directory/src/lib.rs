//! Read-only client for the authoritative employee directory.
//!
//! The directory holds the organization's source of truth about employees:
//! role, activation status, organizational metadata, and the deterministic
//! default credential used for first-time account provisioning. This crate
//! provides:
//! - the [`DirectoryClient`] trait the reconciliation engine depends on
//! - the directory record types ([`Identity`], [`BootstrapCredential`])
//! - [`HttpDirectoryClient`], the reqwest-backed implementation of the
//!   endpoint-discriminated wire contract
//! - [`DirectoryError`] with the transient/permanent split callers use to
//!   decide on retries

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

// Re-export main types at crate root
pub use client::DirectoryClient;
pub use config::DirectoryConfig;
pub use error::DirectoryError;
pub use http::HttpDirectoryClient;
pub use types::{BootstrapCredential, EmployeeRole, Identity};
