//! REST client for the AfyaLink backend.
//!
//! A thin wrapper over [`reqwest::Client`] that knows the backend's
//! endpoints, attaches the bearer token where required, and decodes
//! snake_case responses into domain types. It performs no retries and
//! holds no session state of its own.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ApiUser, AuthResponse, LoginRequest, RegisterRequest, User, UserPatch};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// `POST /auth/login` — returns the bearer token and the remapped user.
    pub async fn login(&self, request: &LoginRequest) -> Result<(String, User), ApiError> {
        self.post_auth("/auth/login", request).await
    }

    /// `POST /auth/register` — same response contract as login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(String, User), ApiError> {
        self.post_auth("/auth/register", request).await
    }

    async fn post_auth(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<(String, User), ApiError> {
        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        let auth: AuthResponse = decode(response).await?;
        Ok((auth.access_token, auth.user.into()))
    }

    /// `GET /auth/me` — the caller's own account record.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.config.endpoint("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        let user: ApiUser = decode(response).await?;
        Ok(user.into())
    }

    /// `PATCH /users/{id}` — partial update; returns the updated record.
    pub async fn update_user(
        &self,
        token: &str,
        id: i64,
        patch: &UserPatch,
    ) -> Result<User, ApiError> {
        let response = self
            .http
            .patch(self.config.endpoint(&format!("/users/{id}")))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        let user: ApiUser = decode(response).await?;
        Ok(user.into())
    }

    /// `GET /users` — admin-only listing.
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let response = self
            .http
            .get(self.config.endpoint("/users"))
            .bearer_auth(token)
            .send()
            .await?;
        let users: Vec<ApiUser> = decode(response).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    /// `DELETE /users/{id}` — admin-only account removal.
    pub async fn delete_user(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.config.endpoint(&format!("/users/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
