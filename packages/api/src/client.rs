//! # REST client
//!
//! [`ApiClient`] is a thin wrapper over a [`reqwest::Client`]: it prefixes every path
//! with the configured base URL, sends JSON, and keeps the session cookie. In the
//! browser the cookie belongs to the page, so every request opts into
//! `credentials: include`; natively the client carries its own cookie jar.
//!
//! Responses are decoded by [`decode_response`]. Non-success statuses become
//! [`ApiError::Status`] carrying the backend's `message`, except for bodies flagged
//! `account_suspended`, which become [`ApiError::AccountSuspended`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::backend::Backend;
use crate::models::{
    AuthResponse, ErrorBody, LoginRequest, RegisterRequest, Role, RoleInfo, RoleUpdate,
    RolesEnvelope, User, UsersEnvelope,
};
use crate::{ApiConfig, ApiError};

const SUSPENDED_FALLBACK: &str =
    "Your account has been suspended. Please contact your administrator.";

/// HTTP implementation of [`Backend`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::default()
        });

        tracing::info!("API base URL: {}", config.base_url());
        Self { http, config }
    }

    /// Client for the backend named by the environment (see [`ApiConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        tracing::debug!("{} {}", status, url);

        let body = response.text().await.map_err(ApiError::from)?;
        decode_response(status, &body).inspect_err(|e| {
            tracing::error!("{} {}: {}", status, url, e);
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path)).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }
}

/// Turn a status code and raw body into either the decoded payload or an [`ApiError`].
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        let body = if body.trim().is_empty() { "null" } else { body };
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    if status == 401 {
        tracing::warn!("Unauthorized request - user may need to login");
    }

    let error: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if error.account_suspended {
        return Err(ApiError::AccountSuspended(
            error
                .message
                .unwrap_or_else(|| SUSPENDED_FALLBACK.to_string()),
        ));
    }
    Err(ApiError::Status {
        status,
        message: error.message,
    })
}

impl Backend for ApiClient {
    async fn check_auth(&self) -> Result<AuthResponse, ApiError> {
        self.get("/check-auth").await
    }

    async fn authenticate(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/authenticate", credentials).await
    }

    async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/register", data).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post::<IgnoredAny>("/logout").await.map(|_| ())
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get::<UsersEnvelope>("/users").await.map(|e| e.users)
    }

    async fn pending_users(&self) -> Result<Vec<User>, ApiError> {
        self.get::<UsersEnvelope>("/users/pending")
            .await
            .map(|e| e.users)
    }

    async fn approve_user(&self, id: i64) -> Result<(), ApiError> {
        self.post::<IgnoredAny>(&format!("/users/{id}/approve"))
            .await
            .map(|_| ())
    }

    async fn update_user_role(&self, id: i64, role: Role) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/users/{id}/role"))
            .json(&RoleUpdate { role });
        self.send::<IgnoredAny>(builder).await.map(|_| ())
    }

    async fn activate_user(&self, id: i64) -> Result<(), ApiError> {
        self.post::<IgnoredAny>(&format!("/users/{id}/activate"))
            .await
            .map(|_| ())
    }

    async fn deactivate_user(&self, id: i64) -> Result<(), ApiError> {
        self.post::<IgnoredAny>(&format!("/users/{id}/deactivate"))
            .await
            .map(|_| ())
    }

    async fn roles(&self) -> Result<Vec<RoleInfo>, ApiError> {
        self.get::<RolesEnvelope>("/roles").await.map(|e| e.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_body() {
        let users: UsersEnvelope =
            decode_response(200, r#"{"users": [{"id": 4, "email": "a@b.co"}]}"#).unwrap();
        assert_eq!(users.users.len(), 1);
        assert_eq!(users.users[0].id, 4);
    }

    #[test]
    fn test_decode_empty_success_body() {
        assert!(decode_response::<IgnoredAny>(204, "").is_ok());
        assert!(decode_response::<IgnoredAny>(200, "  ").is_ok());
    }

    #[test]
    fn test_decode_garbage_success_body() {
        let err = decode_response::<UsersEnvelope>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_error_with_message() {
        let err = decode_response::<AuthResponse>(
            401,
            r#"{"success": false, "message": "Invalid email or password"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: Some("Invalid email or password".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_error_without_json() {
        let err = decode_response::<AuthResponse>(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: None,
            }
        );
    }

    #[test]
    fn test_decode_account_suspended() {
        let err = decode_response::<AuthResponse>(
            403,
            r#"{"success": false, "account_suspended": true, "message": "Account suspended by admin"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::AccountSuspended("Account suspended by admin".to_string())
        );

        let err =
            decode_response::<AuthResponse>(403, r#"{"account_suspended": true}"#).unwrap_err();
        assert_eq!(err, ApiError::AccountSuspended(SUSPENDED_FALLBACK.to_string()));
    }

    #[test]
    fn test_client_keeps_config() {
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9/api/").unwrap());
        assert_eq!(client.config().base_url(), "http://127.0.0.1:9/api");
    }
}
