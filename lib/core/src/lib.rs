//! Shared identifier types for the rosterkit staff portal.
//!
//! This crate provides the strongly-typed identifiers used across the
//! directory client, the credential provider abstraction, and the
//! reconciliation engine.
//!
//! # Example
//!
//! ```
//! use rosterkit_core::{Email, EmployeeId};
//!
//! let email = Email::new(" Staff@Example.com ").expect("valid address");
//! assert_eq!(email.as_str(), "staff@example.com");
//!
//! let employee_id = EmployeeId::new("199505152021011002");
//! assert_eq!(employee_id.as_str(), "199505152021011002");
//! ```

pub mod id;

pub use id::{Email, EmployeeId, ParseIdError};
