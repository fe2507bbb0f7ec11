use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::Backend;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Role, RoleInfo, User};
use crate::ApiError;

/// In-memory [`Backend`] for tests and offline demos.
///
/// Behaves like the real backend: one cookie-style session, admin-only user
/// management, and deactivated accounts refused at login as suspended.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    accounts: Vec<Account>,
    session: Option<i64>,
    next_id: i64,
    offline: bool,
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account; `user.id` is kept if non-zero, otherwise assigned.
    pub fn with_user(self, user: User, password: &str) -> Self {
        self.insert(user, password);
        self
    }

    /// Add an account and return its id.
    pub fn insert(&self, mut user: User, password: &str) -> i64 {
        let mut state = self.lock();
        if user.id == 0 {
            state.next_id += 1;
            user.id = state.next_id;
        } else {
            state.next_id = state.next_id.max(user.id);
        }
        let id = user.id;
        state.accounts.push(Account {
            user,
            password: password.to_string(),
        });
        id
    }

    /// Make every subsequent call fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn signed_in(&self) -> Option<User> {
        let state = self.lock();
        state
            .session
            .and_then(|id| state.find(id))
            .map(|account| account.user.clone())
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.lock().find(id).map(|account| account.user.clone())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn online(&self) -> Result<MutexGuard<'_, State>, ApiError> {
        let state = self.lock();
        if state.offline {
            return Err(ApiError::Network("backend unreachable".to_string()));
        }
        Ok(state)
    }

    /// Lock the state for an admin-only operation.
    fn as_admin(&self) -> Result<MutexGuard<'_, State>, ApiError> {
        let state = self.online()?;
        let Some(current) = state.session.and_then(|id| state.find(id)) else {
            return Err(status(401, "Authentication required"));
        };
        if !current.user.is_admin() {
            return Err(status(403, "Insufficient permissions"));
        }
        Ok(state)
    }

    fn update_user(&self, id: i64, change: impl FnOnce(&mut User)) -> Result<(), ApiError> {
        let mut state = self.as_admin()?;
        let account = state
            .find_mut(id)
            .ok_or_else(|| status(404, "User not found"))?;
        change(&mut account.user);
        Ok(())
    }
}

impl State {
    fn find(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.user.id == id)
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.user.id == id)
    }

    fn find_email(&self, email: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email.trim()))
    }
}

fn status(code: u16, message: &str) -> ApiError {
    ApiError::Status {
        status: code,
        message: Some(message.to_string()),
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn signed_in_response(user: User) -> AuthResponse {
    let approved = user.approved();
    AuthResponse {
        success: true,
        is_approved: approved,
        message: (!approved).then(|| "Your account is pending admin approval".to_string()),
        user: Some(user),
    }
}

impl Backend for MemoryBackend {
    async fn check_auth(&self) -> Result<AuthResponse, ApiError> {
        let state = self.online()?;
        let user = state
            .session
            .and_then(|id| state.find(id))
            .map(|account| account.user.clone());
        Ok(match user {
            Some(user) => signed_in_response(user),
            None => AuthResponse {
                message: Some("Not authenticated".to_string()),
                ..AuthResponse::default()
            },
        })
    }

    async fn authenticate(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let mut state = self.online()?;
        let account = state
            .find_email(&credentials.email)
            .filter(|a| a.password == credentials.password)
            .cloned()
            .ok_or_else(|| status(401, "Invalid email or password"))?;

        if !account.user.is_active {
            return Err(ApiError::AccountSuspended(
                "Your account has been suspended. Please contact your administrator."
                    .to_string(),
            ));
        }

        state.session = Some(account.user.id);
        if let Some(stored) = state.find_mut(account.user.id) {
            stored.user.last_login = Some(now());
        }
        Ok(signed_in_response(account.user))
    }

    async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        if self.online()?.find_email(&data.email).is_some() {
            return Err(status(409, "Email already registered"));
        }
        if data.password != data.confirm_password {
            return Err(status(400, "Passwords do not match"));
        }

        let mut user = User::new(0, &data.first_name, &data.last_name, data.email.trim());
        user.mobile = Some(data.mobile.clone());
        user.created_at = Some(now());
        let id = self.insert(user, &data.password);

        let mut state = self.lock();
        state.session = Some(id);
        let user = state
            .find(id)
            .map(|a| a.user.clone())
            .ok_or_else(|| status(500, "Registration failed"))?;
        Ok(signed_in_response(user))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.online()?.session = None;
        Ok(())
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        let state = self.as_admin()?;
        Ok(state.accounts.iter().map(|a| a.user.clone()).collect())
    }

    async fn pending_users(&self) -> Result<Vec<User>, ApiError> {
        let state = self.as_admin()?;
        Ok(state
            .accounts
            .iter()
            .filter(|a| !a.user.is_approved)
            .map(|a| a.user.clone())
            .collect())
    }

    async fn approve_user(&self, id: i64) -> Result<(), ApiError> {
        self.update_user(id, |user| {
            user.is_approved = true;
            user.approved_at = Some(now());
        })
    }

    async fn update_user_role(&self, id: i64, role: Role) -> Result<(), ApiError> {
        self.update_user(id, |user| user.role = Some(role))
    }

    async fn activate_user(&self, id: i64) -> Result<(), ApiError> {
        self.update_user(id, |user| user.is_active = true)
    }

    async fn deactivate_user(&self, id: i64) -> Result<(), ApiError> {
        self.update_user(id, |user| user.is_active = false)
    }

    async fn roles(&self) -> Result<Vec<RoleInfo>, ApiError> {
        let _admin = self.as_admin()?;
        Ok(Role::ALL
            .into_iter()
            .zip([100, 80, 60, 40, 20])
            .map(|(name, hierarchy)| RoleInfo {
                name,
                hierarchy,
                permissions: Vec::new(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User::new(1, "Admin", "User", "admin@keansa.com").with_role(Role::SuperAdmin)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_and_check() {
        let backend = MemoryBackend::new().with_user(admin(), "admin123");

        let unauthenticated = backend.check_auth().await.unwrap();
        assert!(!unauthenticated.success);

        let response = backend
            .authenticate(&login("ADMIN@keansa.com", "admin123"))
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.is_approved);

        let check = backend.check_auth().await.unwrap();
        assert_eq!(check.into_user().map(|u| u.id), Some(1));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let backend = MemoryBackend::new().with_user(admin(), "admin123");
        let err = backend.authenticate(&login("admin@keansa.com", "nope")).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(backend.signed_in().is_none());
    }

    #[tokio::test]
    async fn test_management_requires_admin() {
        let backend = MemoryBackend::new()
            .with_user(admin(), "admin123")
            .with_user(User::new(2, "Joe", "User", "joe@example.com"), "joepass");

        assert!(backend.users().await.unwrap_err().is_unauthorized());

        backend.authenticate(&login("joe@example.com", "joepass")).await.unwrap();
        let err = backend.approve_user(2).await.unwrap_err();
        assert_eq!(err.backend_message(), Some("Insufficient permissions"));
    }

    #[tokio::test]
    async fn test_register_assigns_ids_and_signs_in() {
        let backend = MemoryBackend::new().with_user(admin(), "admin123");
        let form = RegisterRequest {
            first_name: "New".to_string(),
            last_name: "Person".to_string(),
            email: "new@example.com".to_string(),
            mobile: "5550001111".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };

        let response = backend.register(&form).await.unwrap();
        let user = response.into_user().unwrap();
        assert_eq!(user.id, 2);
        assert!(!user.is_approved);
        assert_eq!(backend.signed_in().map(|u| u.id), Some(2));

        let duplicate = backend.register(&form).await.unwrap_err();
        assert_eq!(duplicate.backend_message(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_offline() {
        let backend = MemoryBackend::new().with_user(admin(), "admin123");
        backend.set_offline(true);
        assert!(matches!(
            backend.check_auth().await,
            Err(ApiError::Network(_))
        ));
    }
}
