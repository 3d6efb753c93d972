//! # User model for AfyaLink accounts
//!
//! Defines the two representations of a user:
//!
//! ## [`User`]
//!
//! The client-side cache of the backend account record. It is a copy, not a
//! live reference; it is refreshed only by explicit operations. The struct
//! serializes with camelCase keys because that is the format the web client
//! has always written under the `currentUser` storage key, and rehydration
//! must keep reading sessions persisted by earlier builds.
//!
//! ## Wire types (see [`super::wire`])
//!
//! The backend speaks snake_case JSON; responses are remapped into [`User`]
//! once, at the response boundary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// An AfyaLink account as cached by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Immutable after creation; no client flow changes it.
    pub role: Role,
    /// Set only on clinic accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_id: Option<i64>,
    #[serde(default, skip_serializing_if = "UserProfile::is_empty")]
    pub profile: UserProfile,
    /// Bookmarked clinics; patient accounts only.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub saved_clinics: BTreeSet<i64>,
}

impl User {
    /// Case-insensitive email comparison, matching backend lookup rules.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Optional profile details, edited through the profile form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> User {
        User {
            id: 7,
            full_name: "Amina Odhiambo".to_string(),
            email: "Amina@Example.KE".to_string(),
            phone_number: Some("+254700000001".to_string()),
            role: Role::Patient,
            clinic_id: None,
            profile: UserProfile {
                blood_type: Some("O+".to_string()),
                ..UserProfile::default()
            },
            saved_clinics: BTreeSet::from([3, 11]),
        }
    }

    #[test]
    fn test_persisted_form_uses_camel_case_keys() {
        let json = serde_json::to_string(&patient()).unwrap();
        assert!(json.contains("\"fullName\":\"Amina Odhiambo\""));
        assert!(json.contains("\"phoneNumber\""));
        assert!(json.contains("\"savedClinics\":[3,11]"));
        assert!(json.contains("\"bloodType\":\"O+\""));
        assert!(!json.contains("full_name"));
    }

    #[test]
    fn test_persisted_form_round_trips() {
        let user = patient();
        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_minimal_record_fills_defaults() {
        let restored: User = serde_json::from_str(
            r#"{"id":1,"fullName":"Grace Njeri","email":"grace@chv.ke","role":"chv"}"#,
        )
        .unwrap();
        assert_eq!(restored.role, Role::Chv);
        assert!(restored.phone_number.is_none());
        assert!(restored.profile.is_empty());
        assert!(restored.saved_clinics.is_empty());
    }

    #[test]
    fn test_email_lookup_ignores_case() {
        let user = patient();
        assert!(user.email_matches("amina@example.ke"));
        assert!(user.email_matches("AMINA@EXAMPLE.KE"));
        assert!(!user.email_matches("amina@clinic.ke"));
    }
}
