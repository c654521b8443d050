//! Directory record types.
//!
//! These records mirror what the authoritative employee directory stores
//! about a person. The directory is read-only from this system's point of
//! view; nothing here is ever written back.

use chrono::{DateTime, Utc};
use rosterkit_core::{Email, EmployeeId};
use serde::{Deserialize, Serialize};

/// The role the directory assigns to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeRole {
    /// Regular staff member; submits their own reports.
    Worker,
    /// Line supervisor; reviews reports of direct subordinates.
    Supervisor,
    /// HR administrator with organization-wide oversight.
    HrAdmin,
}

impl EmployeeRole {
    /// Returns the wire representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Supervisor => "supervisor",
            Self::HrAdmin => "hr-admin",
        }
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An employee identity as the directory knows it.
///
/// Fetched fresh on every authentication attempt; cached copies are a display
/// convenience only and must never drive an authorization decision.
/// `requires_password_change` is not a directory field: the reconciliation
/// engine sets it when the credential in use is still the directory default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The join key shared with the credential provider.
    pub email: Email,
    /// Full display name.
    pub display_name: String,
    /// Directory-assigned employee identifier.
    pub employee_id: EmployeeId,
    /// Role within the organization.
    pub role: EmployeeRole,
    /// Organizational unit the employee belongs to.
    pub organizational_unit: String,
    /// Position title.
    pub position: String,
    /// Email of the employee's supervisor, when one is assigned.
    #[serde(default)]
    pub supervisor_email: Option<Email>,
    /// Whether the directory considers this employee active.
    pub is_active: bool,
    /// True when the account still uses the directory's default credential.
    /// Set by the reconciliation engine, never sent by the directory.
    #[serde(default)]
    pub requires_password_change: bool,
    /// When the directory record was created.
    pub created_at: DateTime<Utc>,
}

/// The directory's provisioning credential for a not-yet-created account.
///
/// By policy the default password is the employee identifier. Fetched lazily,
/// only on the provisioning branch of a login, and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapCredential {
    /// The account the credential belongs to.
    pub email: Email,
    /// The deterministic default password (the employee identifier).
    pub default_password: String,
    /// Display name to stamp onto the freshly created account.
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_identity_json() -> &'static str {
        r#"{
            "email": "kirin@example.co.id",
            "display_name": "Kirin Developer",
            "employee_id": "199505152021011002",
            "role": "worker",
            "organizational_unit": "Technology Division",
            "position": "IT Staff",
            "supervisor_email": "head@example.co.id",
            "is_active": true,
            "created_at": "2025-01-01T00:00:00Z"
        }"#
    }

    #[test]
    fn role_wire_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&EmployeeRole::HrAdmin).expect("serialize"),
            "\"hr-admin\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Worker).expect("serialize"),
            "\"worker\""
        );
        assert_eq!(EmployeeRole::Supervisor.as_str(), "supervisor");
    }

    #[test]
    fn identity_deserializes_from_directory_record() {
        let identity: Identity =
            serde_json::from_str(sample_identity_json()).expect("deserialize");

        assert_eq!(identity.email.as_str(), "kirin@example.co.id");
        assert_eq!(identity.employee_id.as_str(), "199505152021011002");
        assert_eq!(identity.role, EmployeeRole::Worker);
        assert!(identity.is_active);
        assert_eq!(
            identity.supervisor_email.as_ref().map(Email::as_str),
            Some("head@example.co.id")
        );
    }

    #[test]
    fn requires_password_change_defaults_to_false() {
        let identity: Identity =
            serde_json::from_str(sample_identity_json()).expect("deserialize");
        assert!(!identity.requires_password_change);
    }

    #[test]
    fn supervisor_email_is_optional() {
        let json = r#"{
            "email": "chief@example.co.id",
            "display_name": "Head of HR",
            "employee_id": "199001012020121001",
            "role": "hr-admin",
            "organizational_unit": "HR Division",
            "position": "Head of HR",
            "is_active": true,
            "created_at": "2025-01-01T00:00:00Z"
        }"#;

        let identity: Identity = serde_json::from_str(json).expect("deserialize");
        assert!(identity.supervisor_email.is_none());
        assert_eq!(identity.role, EmployeeRole::HrAdmin);
    }

    #[test]
    fn identity_serde_roundtrip() {
        let identity: Identity =
            serde_json::from_str(sample_identity_json()).expect("deserialize");
        let json = serde_json::to_string(&identity).expect("serialize");
        let parsed: Identity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(identity, parsed);
    }
}
