//! Account roles and their landing routes.

use serde::{Deserialize, Serialize};

/// Account role, exactly as issued by the backend.
///
/// `Unknown` absorbs role strings outside the closed set so an otherwise
/// valid session survives deserialization; such users land on the public
/// home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Clinic,
    Admin,
    Chv,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Role name as sent in request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Clinic => "clinic",
            Role::Admin => "admin",
            Role::Chv => "chv",
            Role::Unknown => "unknown",
        }
    }

    /// Parse a role string; anything outside the closed set maps to
    /// [`Role::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "patient" => Role::Patient,
            "clinic" => Role::Clinic,
            "admin" => Role::Admin,
            "chv" => Role::Chv,
            _ => Role::Unknown,
        }
    }

    /// Landing route for this role, consulted after login/signup and by
    /// the route guard's role-mismatch redirect.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Patient => "/patient-dashboard",
            Role::Clinic => "/clinic-dashboard",
            Role::Admin => "/admin-dashboard",
            Role::Chv => "/chv-dashboard",
            Role::Unknown => "/",
        }
    }
}
