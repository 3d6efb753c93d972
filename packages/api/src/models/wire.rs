//! Wire-format types for the AfyaLink backend.
//!
//! Requests serialize with the snake_case field names the backend expects;
//! responses deserialize into these types and are converted into the
//! client-side [`User`] exactly once.

use serde::{Deserialize, Serialize};

use crate::models::{Role, User, UserProfile};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: Role,
}

/// Successful response of the login and register endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: ApiUser,
}

/// A user record as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub clinic_id: Option<i64>,
    #[serde(default)]
    pub profile: Option<ApiProfile>,
    #[serde(default)]
    pub saved_clinics: Option<Vec<i64>>,
}

impl From<ApiUser> for User {
    fn from(user: ApiUser) -> Self {
        User {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone_number: user.phone_number,
            role: user.role,
            clinic_id: user.clinic_id,
            profile: user.profile.map(UserProfile::from).unwrap_or_default(),
            saved_clinics: user.saved_clinics.unwrap_or_default().into_iter().collect(),
        }
    }
}

/// Profile sub-record in wire form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

impl From<ApiProfile> for UserProfile {
    fn from(profile: ApiProfile) -> Self {
        UserProfile {
            dob: profile.dob,
            gender: profile.gender,
            country: profile.country,
            blood_type: profile.blood_type,
            allergies: profile.allergies,
            emergency_contact: profile.emergency_contact,
        }
    }
}

impl From<UserProfile> for ApiProfile {
    fn from(profile: UserProfile) -> Self {
        ApiProfile {
            dob: profile.dob,
            gender: profile.gender,
            country: profile.country,
            blood_type: profile.blood_type,
            allergies: profile.allergies,
            emergency_contact: profile.emergency_contact,
        }
    }
}

/// Partial update body for `PATCH /users/{id}`.
///
/// Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ApiProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_clinics: Option<Vec<i64>>,
}
