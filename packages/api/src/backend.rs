//! The seam between the console and its REST backend.

use std::future::Future;

use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Role, RoleInfo, User};
use crate::ApiError;

/// One method per backend endpoint.
///
/// Implemented by [`crate::ApiClient`] (HTTP) and [`crate::MemoryBackend`] (tests and
/// offline demos).
pub trait Backend {
    /// `GET /check-auth`
    fn check_auth(&self) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    /// `POST /authenticate`
    fn authenticate(
        &self,
        credentials: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    /// `POST /register`
    fn register(
        &self,
        data: &RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    /// `POST /logout`
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /users`
    fn users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;

    /// `GET /users/pending`
    fn pending_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;

    /// `POST /users/{id}/approve`
    fn approve_user(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /users/{id}/role`
    fn update_user_role(
        &self,
        id: i64,
        role: Role,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /users/{id}/activate`
    fn activate_user(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /users/{id}/deactivate`
    fn deactivate_user(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /roles`
    fn roles(&self) -> impl Future<Output = Result<Vec<RoleInfo>, ApiError>>;
}
