//! Strongly-typed identifier types for directory-issued values.
//!
//! Unlike internally-minted ids, every identifier in this system originates
//! in an external system: email addresses join the directory and the
//! credential provider, and employee identifiers are assigned by the
//! directory. Both are therefore validated string wrappers rather than
//! generated values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an identifier from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of identifier that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// An email address, normalized for use as the identity join key.
///
/// Both external systems are keyed by email; case or whitespace differences
/// between them would silently split one person into two identities, so the
/// address is trimmed and ASCII-lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a normalized email from any string-ish input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming or has no `@`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ParseIdError> {
        let normalized = raw.as_ref().trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ParseIdError {
                id_type: "Email",
                reason: "empty address".to_string(),
            });
        }
        if !normalized.contains('@') {
            return Err(ParseIdError {
                id_type: "Email",
                reason: format!("missing '@' in '{normalized}'"),
            });
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ParseIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// A directory-assigned employee identifier.
///
/// Opaque to this system except for one policy-level property: the directory
/// uses it as the deterministic default credential when an account is
/// provisioned for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates an employee identifier from a directory-supplied value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
