//! Authentication operations.
//!
//! One-shot network operations over the [`ApiClient`] that mutate the
//! [`SessionStore`] on success and leave it untouched on failure. Nothing
//! here retries; callers show a generic message and the typed error goes
//! to the log.

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, Role, User, UserPatch};
use crate::session::{Session, SessionStore};

/// The session core's write side: login, signup, logout, profile updates
/// and the admin user directory.
#[derive(Clone)]
pub struct Auth {
    client: ApiClient,
    store: SessionStore,
    directory: Rc<RefCell<Vec<User>>>,
}

impl Auth {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            directory: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session(&self) -> Session {
        self.store.snapshot()
    }

    /// Restore a persisted session. Privileged caches (the admin
    /// directory) are refreshed separately, depending on the restored
    /// role.
    pub fn rehydrate(&self) {
        self.store.rehydrate();
    }

    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        };
        match self.client.login(&request).await {
            Ok((token, user)) => {
                self.store.set_credentials(token, user.clone());
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(%error, "login failed");
                Err(error)
            }
        }
    }

    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
        role: Role,
    ) -> Result<User, ApiError> {
        let request = RegisterRequest {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
            password: password.to_string(),
            role,
        };
        match self.client.register(&request).await {
            Ok((token, user)) => {
                self.store.set_credentials(token, user.clone());
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(%error, "signup failed");
                Err(error)
            }
        }
    }

    /// Synchronous and unconditional; also drops the cached directory.
    pub fn logout(&self) {
        self.directory.borrow_mut().clear();
        self.store.clear();
    }

    fn authenticated(&self) -> Result<(String, User), ApiError> {
        let session = self.store.snapshot();
        match (session.token(), session.user()) {
            (Some(token), Some(user)) => Ok((token.to_string(), user.clone())),
            _ => Err(ApiError::NotAuthenticated),
        }
    }

    /// Re-fetch the session user from the backend, replacing the cached
    /// copy.
    pub async fn refresh_profile(&self) -> Result<User, ApiError> {
        let (token, _) = self.authenticated()?;
        let user = self.client.current_user(&token).await?;
        self.store.update_user(user.clone());
        Ok(user)
    }

    /// Partial profile update via `PATCH /users/{id}`.
    pub async fn update_profile(&self, patch: UserPatch) -> Result<User, ApiError> {
        let (token, user) = self.authenticated()?;
        let updated = self.client.update_user(&token, user.id, &patch).await?;
        self.store.update_user(updated.clone());
        Ok(updated)
    }

    /// Toggle `clinic_id` in the patient's saved clinics.
    ///
    /// The toggle is applied locally first, then persisted with a partial
    /// update; a rejected update is rolled back and the error returned.
    pub async fn toggle_saved_clinic(&self, clinic_id: i64) -> Result<User, ApiError> {
        let (token, original) = self.authenticated()?;
        if original.role != Role::Patient {
            return Err(ApiError::Forbidden);
        }

        let mut toggled = original.clone();
        if !toggled.saved_clinics.remove(&clinic_id) {
            toggled.saved_clinics.insert(clinic_id);
        }
        self.store.update_user(toggled.clone());

        let patch = UserPatch {
            saved_clinics: Some(toggled.saved_clinics.iter().copied().collect()),
            ..UserPatch::default()
        };
        match self.client.update_user(&token, original.id, &patch).await {
            Ok(updated) => {
                self.store.update_user(updated.clone());
                Ok(updated)
            }
            Err(error) => {
                tracing::warn!(%error, clinic_id, "saved-clinic toggle rejected, rolling back");
                self.store.update_user(original);
                Err(error)
            }
        }
    }

    /// Refresh the admin user directory from `GET /users`.
    pub async fn refresh_directory(&self) -> Result<Vec<User>, ApiError> {
        let (token, user) = self.authenticated()?;
        if user.role != Role::Admin {
            return Err(ApiError::Forbidden);
        }
        let users = self.client.list_users(&token).await?;
        *self.directory.borrow_mut() = users.clone();
        Ok(users)
    }

    /// Cached copy of the last directory refresh.
    pub fn directory(&self) -> Vec<User> {
        self.directory.borrow().clone()
    }

    /// Case-insensitive directory lookup by email.
    pub fn find_user(&self, email: &str) -> Option<User> {
        self.directory
            .borrow()
            .iter()
            .find(|u| u.email_matches(email))
            .cloned()
    }

    /// Delete an account and drop it from the cached directory.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let (token, user) = self.authenticated()?;
        if user.role != Role::Admin {
            return Err(ApiError::Forbidden);
        }
        self.client.delete_user(&token, id).await?;
        self.directory.borrow_mut().retain(|u| u.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{CredentialStore, MemoryStore};
    use wiremock::matchers::{body_json, body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiConfig;
    use crate::models::UserProfile;
    use crate::session::{TOKEN_KEY, USER_KEY};

    fn auth_against(uri: &str) -> (Auth, MemoryStore) {
        let storage = MemoryStore::new();
        let store = SessionStore::new(storage.clone());
        store.rehydrate();
        let auth = Auth::new(ApiClient::new(ApiConfig::new(uri)), store);
        (auth, storage)
    }

    fn patient(saved: &[i64]) -> User {
        User {
            id: 7,
            full_name: "Amina Odhiambo".to_string(),
            email: "amina@example.ke".to_string(),
            phone_number: None,
            role: Role::Patient,
            clinic_id: None,
            profile: UserProfile::default(),
            saved_clinics: saved.iter().copied().collect(),
        }
    }

    fn admin() -> User {
        User {
            id: 2,
            full_name: "Daniel Mwangi".to_string(),
            email: "daniel@afyalink.ke".to_string(),
            phone_number: None,
            role: Role::Admin,
            clinic_id: None,
            profile: UserProfile::default(),
            saved_clinics: Default::default(),
        }
    }

    fn patched_user(saved: &[i64]) -> serde_json::Value {
        json!({
            "id": 7,
            "full_name": "Amina Odhiambo",
            "email": "amina@example.ke",
            "role": "patient",
            "saved_clinics": saved,
        })
    }

    #[tokio::test]
    async fn test_login_populates_session_and_storage() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "email": "grace@chv.ke",
                "password": "x",
                "role": "chv",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok1",
                "user": {
                    "id": 1,
                    "full_name": "Grace Njeri",
                    "email": "grace@chv.ke",
                    "role": "chv",
                },
            })))
            .mount(&server)
            .await;

        let (auth, storage) = auth_against(&server.uri());
        let user = auth.login("grace@chv.ke", "x", Role::Chv).await.unwrap();

        assert_eq!(user.full_name, "Grace Njeri");
        assert_eq!(user.role.landing_path(), "/chv-dashboard");
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok1"));
        assert!(storage.get(USER_KEY).unwrap().contains("\"fullName\":\"Grace Njeri\""));
        assert_eq!(auth.session().token(), Some("tok1"));
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (auth, storage) = auth_against(&server.uri());
        let err = auth.login("grace@chv.ke", "wrong", Role::Chv).await.unwrap_err();

        assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 401));
        assert!(!auth.session().is_authenticated());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_network_error() {
        let (auth, _) = auth_against("http://127.0.0.1:9");
        let err = auth.login("grace@chv.ke", "x", Role::Chv).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(!auth.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_malformed_login_response_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let (auth, storage) = auth_against(&server.uri());
        let err = auth.login("grace@chv.ke", "x", Role::Chv).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_signup_registers_and_signs_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_partial_json(json!({
                "full_name": "Amina Odhiambo",
                "phone_number": "+254700000001",
                "role": "patient",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok2",
                "user": patched_user(&[]),
            })))
            .mount(&server)
            .await;

        let (auth, storage) = auth_against(&server.uri());
        let user = auth
            .signup(
                "Amina Odhiambo",
                "amina@example.ke",
                "+254700000001",
                "secret123",
                Role::Patient,
            )
            .await
            .unwrap();

        assert_eq!(user.role, Role::Patient);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok2"));
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_directory() {
        let (auth, storage) = auth_against("http://127.0.0.1:9");
        auth.store().set_credentials("tok1".to_string(), admin());
        auth.directory.borrow_mut().push(patient(&[]));

        auth.logout();

        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert!(!auth.session().is_authenticated());
        assert!(auth.directory().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_saved_clinic_twice_restores_original_set() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .and(header("Authorization", "Bearer tok1"))
            .and(body_json(json!({"saved_clinics": [4]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(patched_user(&[4])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .and(body_json(json!({"saved_clinics": []})))
            .respond_with(ResponseTemplate::new(200).set_body_json(patched_user(&[])))
            .mount(&server)
            .await;

        let (auth, _) = auth_against(&server.uri());
        auth.store().set_credentials("tok1".to_string(), patient(&[]));

        let toggled = auth.toggle_saved_clinic(4).await.unwrap();
        assert!(toggled.saved_clinics.contains(&4));

        let restored = auth.toggle_saved_clinic(4).await.unwrap();
        assert!(restored.saved_clinics.is_empty());
        assert_eq!(restored.saved_clinics, patient(&[]).saved_clinics);
    }

    #[tokio::test]
    async fn test_rejected_toggle_rolls_back_optimistic_update() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (auth, storage) = auth_against(&server.uri());
        auth.store().set_credentials("tok1".to_string(), patient(&[3]));

        let err = auth.toggle_saved_clinic(4).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));

        let user = auth.session().user().cloned().unwrap();
        assert_eq!(user.saved_clinics, patient(&[3]).saved_clinics);
        assert!(storage.get(USER_KEY).unwrap().contains("\"savedClinics\":[3]"));
    }

    #[tokio::test]
    async fn test_toggle_is_patient_only() {
        let (auth, _) = auth_against("http://127.0.0.1:9");
        auth.store().set_credentials("tok1".to_string(), admin());

        let err = auth.toggle_saved_clinic(4).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
        assert!(auth.session().user().unwrap().saved_clinics.is_empty());
    }

    #[tokio::test]
    async fn test_operations_require_a_session() {
        let (auth, _) = auth_against("http://127.0.0.1:9");

        assert!(matches!(
            auth.toggle_saved_clinic(1).await.unwrap_err(),
            ApiError::NotAuthenticated
        ));
        assert!(matches!(
            auth.refresh_profile().await.unwrap_err(),
            ApiError::NotAuthenticated
        ));
        assert!(matches!(
            auth.refresh_directory().await.unwrap_err(),
            ApiError::NotAuthenticated
        ));
    }

    #[tokio::test]
    async fn test_refresh_profile_replaces_cached_copy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("Authorization", "Bearer tok1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "full_name": "Amina Odhiambo",
                "email": "amina@example.ke",
                "phone_number": "+254722999999",
                "role": "patient",
            })))
            .mount(&server)
            .await;

        let (auth, _) = auth_against(&server.uri());
        auth.store().set_credentials("tok1".to_string(), patient(&[]));

        let user = auth.refresh_profile().await.unwrap();
        assert_eq!(user.phone_number.as_deref(), Some("+254722999999"));
        assert_eq!(
            auth.session().user().unwrap().phone_number.as_deref(),
            Some("+254722999999")
        );
    }

    #[tokio::test]
    async fn test_update_profile_patches_and_caches() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .and(body_json(json!({"profile": {"blood_type": "O+"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "full_name": "Amina Odhiambo",
                "email": "amina@example.ke",
                "role": "patient",
                "profile": {"blood_type": "O+"},
            })))
            .mount(&server)
            .await;

        let (auth, _) = auth_against(&server.uri());
        auth.store().set_credentials("tok1".to_string(), patient(&[]));

        let patch = UserPatch {
            profile: Some(crate::models::ApiProfile {
                blood_type: Some("O+".to_string()),
                ..Default::default()
            }),
            ..UserPatch::default()
        };
        let user = auth.update_profile(patch).await.unwrap();
        assert_eq!(user.profile.blood_type.as_deref(), Some("O+"));
        assert_eq!(
            auth.session().user().unwrap().profile.blood_type.as_deref(),
            Some("O+")
        );
    }

    #[tokio::test]
    async fn test_directory_refresh_and_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("Authorization", "Bearer tok1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "full_name": "Daniel Mwangi", "email": "daniel@afyalink.ke", "role": "admin"},
                {"id": 7, "full_name": "Amina Odhiambo", "email": "amina@example.ke", "role": "patient"},
            ])))
            .mount(&server)
            .await;

        let (auth, _) = auth_against(&server.uri());
        auth.store().set_credentials("tok1".to_string(), admin());

        let listed = auth.refresh_directory().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(auth.directory().len(), 2);

        let found = auth.find_user("AMINA@EXAMPLE.KE").unwrap();
        assert_eq!(found.id, 7);
    }

    #[tokio::test]
    async fn test_directory_is_admin_only() {
        let (auth, _) = auth_against("http://127.0.0.1:9");
        auth.store().set_credentials("tok1".to_string(), patient(&[]));

        assert!(matches!(
            auth.refresh_directory().await.unwrap_err(),
            ApiError::Forbidden
        ));
    }

    #[tokio::test]
    async fn test_delete_user_drops_directory_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "full_name": "Daniel Mwangi", "email": "daniel@afyalink.ke", "role": "admin"},
                {"id": 7, "full_name": "Amina Odhiambo", "email": "amina@example.ke", "role": "patient"},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/7"))
            .and(header("Authorization", "Bearer tok1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (auth, _) = auth_against(&server.uri());
        auth.store().set_credentials("tok1".to_string(), admin());
        auth.refresh_directory().await.unwrap();

        auth.delete_user(7).await.unwrap();
        assert_eq!(auth.directory().len(), 1);
        assert!(auth.find_user("amina@example.ke").is_none());
    }
}
