//! # Session state held by the auth context
//!
//! [`SessionState`] is the client's view of the cookie-backed session: the cached
//! user, whether a session exists, and whether the initial check is still running.
//!
//! Each backend call has a matching `apply_*` transition so UI code can await the
//! request first and then update its signal in one step. The async methods
//! (`check_auth_status`, `login`, `register`, `logout`) just chain the two.
//!
//! | Transition | On success | On failure |
//! |------------|-----------|------------|
//! | [`apply_check`](SessionState::apply_check) | user cached, authenticated | cleared |
//! | [`apply_login`](SessionState::apply_login) | user cached, `Ok(true)` | unchanged, `Ok(false)` or `Err` |
//! | [`apply_register`](SessionState::apply_register) | user cached, `Ok(true)` | unchanged, `Ok(false)` or `Err` |
//! | [`apply_logout`](SessionState::apply_logout) | cleared | cleared (error only logged) |
//!
//! `loading` is cleared by every check outcome.

use crate::backend::Backend;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::ApiError;

/// Authentication state shared through the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True until the first session check resolves.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    /// A resolved, signed-out state.
    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// A resolved, signed-in state.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    /// Whether the signed-in user may see the dashboard.
    pub fn is_approved(&self) -> bool {
        self.user.as_ref().is_some_and(User::approved)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.is_authenticated = user.is_some();
        self.user = user;
    }

    fn clear(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }

    pub fn apply_check(&mut self, outcome: Result<AuthResponse, ApiError>) {
        match outcome.map(AuthResponse::into_user) {
            Ok(Some(user)) => {
                tracing::info!("Session restored for {}", user.email);
                self.set_user(Some(user));
            }
            Ok(None) => self.clear(),
            Err(e) => {
                tracing::error!("Auth check failed: {}", e);
                self.clear();
            }
        }
        self.loading = false;
    }

    pub fn apply_login(&mut self, outcome: Result<AuthResponse, ApiError>) -> Result<bool, ApiError> {
        let response = outcome.inspect_err(|e| tracing::error!("Login failed: {}", e))?;

        let approved_by_backend = response.is_approved;
        let message = response.message.clone();
        let Some(user) = response.into_user() else {
            return Ok(false);
        };

        if !approved_by_backend && !user.is_admin() {
            tracing::warn!(
                "User not approved: {}",
                message.as_deref().unwrap_or("pending approval")
            );
        }
        self.set_user(Some(user));
        Ok(true)
    }

    pub fn apply_register(
        &mut self,
        outcome: Result<AuthResponse, ApiError>,
    ) -> Result<bool, ApiError> {
        let response = outcome.inspect_err(|e| tracing::error!("Registration failed: {}", e))?;
        match response.into_user() {
            Some(user) => {
                self.set_user(Some(user));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn apply_logout(&mut self, outcome: Result<(), ApiError>) {
        if let Err(e) = outcome {
            tracing::error!("Logout error: {}", e);
        }
        self.clear();
    }

    /// Hydrate from the server-side cookie check.
    pub async fn check_auth_status<B: Backend>(&mut self, backend: &B) {
        let outcome = backend.check_auth().await;
        self.apply_check(outcome);
    }

    pub async fn login<B: Backend>(
        &mut self,
        backend: &B,
        email: &str,
        password: &str,
    ) -> Result<bool, ApiError> {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let outcome = backend.authenticate(&credentials).await;
        self.apply_login(outcome)
    }

    /// Create an account; the backend signs the new user in.
    pub async fn register<B: Backend>(
        &mut self,
        backend: &B,
        data: &RegisterRequest,
    ) -> Result<bool, ApiError> {
        let outcome = backend.register(data).await;
        self.apply_register(outcome)
    }

    pub async fn logout<B: Backend>(&mut self, backend: &B) {
        let outcome = backend.logout().await;
        self.apply_logout(outcome);
    }
}
