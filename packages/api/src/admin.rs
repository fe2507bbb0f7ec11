//! # User management workflow behind the admin dashboard
//!
//! [`AdminData::load`] fetches users, pending users and roles concurrently. Every
//! [`UserAction`] is one backend call; callers reload the whole [`AdminData`]
//! afterwards instead of patching it.

use std::collections::HashMap;

use crate::backend::Backend;
use crate::models::{Role, RoleInfo, User};
use crate::ApiError;

/// Everything the admin dashboard displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminData {
    pub users: Vec<User>,
    pub pending: Vec<User>,
    pub roles: Vec<RoleInfo>,
}

impl AdminData {
    pub async fn load<B: Backend>(backend: &B) -> Result<Self, ApiError> {
        let (users, pending, roles) =
            futures::try_join!(backend.users(), backend.pending_users(), backend.roles())?;
        tracing::debug!(
            "Loaded {} users ({} pending), {} roles",
            users.len(),
            pending.len(),
            roles.len()
        );
        Ok(Self {
            users,
            pending,
            roles,
        })
    }

    pub fn total(&self) -> usize {
        self.users.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Users that are both active and approved.
    pub fn active_count(&self) -> usize {
        self.users
            .iter()
            .filter(|u| u.is_active && u.is_approved)
            .count()
    }

    /// Role selector seed: each user's current role.
    pub fn role_selections(&self) -> HashMap<i64, Role> {
        self.users
            .iter()
            .filter_map(|u| u.role.map(|role| (u.id, role)))
            .collect()
    }

    /// Roles offered by the selector; falls back to every known role when the
    /// backend returned none.
    pub fn assignable_roles(&self) -> Vec<Role> {
        if self.roles.is_empty() {
            Role::ALL.to_vec()
        } else {
            self.roles.iter().map(|r| r.name).collect()
        }
    }
}

/// A management action on one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Approve,
    ChangeRole(Role),
    Activate,
    Deactivate,
}

impl UserAction {
    /// Activate/deactivate toggle for a row.
    pub fn toggle_for(user: &User) -> Self {
        if user.is_active {
            UserAction::Deactivate
        } else {
            UserAction::Activate
        }
    }

    pub async fn perform<B: Backend>(self, backend: &B, user_id: i64) -> Result<(), ApiError> {
        tracing::info!("{:?} user {}", self, user_id);
        match self {
            UserAction::Approve => backend.approve_user(user_id).await,
            UserAction::ChangeRole(role) => backend.update_user_role(user_id, role).await,
            UserAction::Activate => backend.activate_user(user_id).await,
            UserAction::Deactivate => backend.deactivate_user(user_id).await,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            UserAction::Approve => "User approved successfully",
            UserAction::ChangeRole(_) => "User role updated successfully",
            UserAction::Activate => "User activated successfully",
            UserAction::Deactivate => "User deactivated successfully",
        }
    }

    pub fn failure_fallback(self) -> &'static str {
        match self {
            UserAction::Approve => "Failed to approve user",
            UserAction::ChangeRole(_) => "Failed to update role",
            UserAction::Activate | UserAction::Deactivate => "Failed to update user status",
        }
    }
}

/// Admins cannot toggle their own account.
pub fn can_toggle_status(actor: Option<&User>, target: &User) -> bool {
    actor.map_or(true, |a| a.id != target.id)
}

/// Role the row's selector shows: the pending selection, else the user's role.
/// `None` means the selector needs a placeholder.
pub fn displayed_role(selected: Option<Role>, user: &User) -> Option<Role> {
    selected.or(user.role)
}

/// Whether the row's Update button should show for `selected`.
pub fn role_change_pending(selected: Option<Role>, user: &User) -> bool {
    selected.is_some_and(|role| Some(role) != user.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginRequest;
    use crate::MemoryBackend;

    async fn signed_in_admin() -> MemoryBackend {
        let backend = MemoryBackend::new()
            .with_user(
                User::new(1, "Admin", "User", "admin@keansa.com")
                    .with_role(Role::SuperAdmin)
                    .approved_flag(true),
                "admin123",
            )
            .with_user(User::new(2, "Pat", "Pending", "pat@example.com"), "patpass")
            .with_user(
                User::new(3, "Ann", "Active", "ann@example.com").approved_flag(true),
                "annpass",
            );
        backend
            .authenticate(&LoginRequest {
                email: "admin@keansa.com".to_string(),
                password: "admin123".to_string(),
            })
            .await
            .unwrap();
        backend
    }

    #[tokio::test]
    async fn test_load_and_stats() {
        let backend = signed_in_admin().await;
        let data = AdminData::load(&backend).await.unwrap();

        assert_eq!(data.total(), 3);
        assert_eq!(data.pending_count(), 1);
        assert_eq!(data.active_count(), 2);
        assert_eq!(data.roles.len(), 5);
        assert_eq!(data.role_selections()[&2], Role::User);
    }

    #[tokio::test]
    async fn test_approve_removes_from_pending_after_reload() {
        let backend = signed_in_admin().await;
        let before = AdminData::load(&backend).await.unwrap();
        assert!(before.pending.iter().any(|u| u.id == 2));

        UserAction::Approve.perform(&backend, 2).await.unwrap();

        // Nothing is patched locally; only a reload reflects the change.
        assert!(before.pending.iter().any(|u| u.id == 2));
        let after = AdminData::load(&backend).await.unwrap();
        assert!(after.pending.iter().all(|u| u.id != 2));
        assert_eq!(after.active_count(), 3);
    }

    #[tokio::test]
    async fn test_role_change_and_toggle() {
        let backend = signed_in_admin().await;

        UserAction::ChangeRole(Role::Manager).perform(&backend, 3).await.unwrap();
        assert_eq!(backend.user(3).unwrap().role, Some(Role::Manager));

        let ann = backend.user(3).unwrap();
        let action = UserAction::toggle_for(&ann);
        assert_eq!(action, UserAction::Deactivate);
        action.perform(&backend, 3).await.unwrap();
        let ann = backend.user(3).unwrap();
        assert!(!ann.is_active);
        assert_eq!(UserAction::toggle_for(&ann), UserAction::Activate);
    }

    #[tokio::test]
    async fn test_load_fails_for_non_admin() {
        let backend = MemoryBackend::new()
            .with_user(User::new(2, "Joe", "User", "joe@example.com").approved_flag(true), "joepass");
        backend
            .authenticate(&LoginRequest {
                email: "joe@example.com".to_string(),
                password: "joepass".to_string(),
            })
            .await
            .unwrap();

        let err = AdminData::load(&backend).await.unwrap_err();
        assert_eq!(err.user_message("Failed to load data"), "Insufficient permissions");
    }

    #[tokio::test]
    async fn test_unknown_user_reports_backend_message() {
        let backend = signed_in_admin().await;
        let err = UserAction::Approve.perform(&backend, 99).await.unwrap_err();
        assert_eq!(
            err.user_message(UserAction::Approve.failure_fallback()),
            "User not found"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(UserAction::Activate.success_message(), "User activated successfully");
        assert_eq!(
            UserAction::Deactivate.failure_fallback(),
            "Failed to update user status"
        );
        assert_eq!(
            UserAction::ChangeRole(Role::Viewer).failure_fallback(),
            "Failed to update role"
        );
    }

    #[test]
    fn test_row_controls() {
        let admin = User::new(1, "Admin", "User", "admin@keansa.com").with_role(Role::Admin);
        let other = User::new(2, "Joe", "User", "joe@example.com");

        assert!(!can_toggle_status(Some(&admin), &admin));
        assert!(can_toggle_status(Some(&admin), &other));
        assert!(can_toggle_status(None, &other));

        assert!(!role_change_pending(None, &other));
        assert!(!role_change_pending(Some(Role::User), &other));
        assert!(role_change_pending(Some(Role::Viewer), &other));
    }

    #[test]
    fn test_roleless_user_can_be_given_any_role() {
        let mut roleless = User::new(4, "No", "Role", "norole@example.com");
        roleless.role = None;

        assert_eq!(displayed_role(None, &roleless), None);
        assert_eq!(
            displayed_role(Some(Role::SuperAdmin), &roleless),
            Some(Role::SuperAdmin)
        );
        assert!(role_change_pending(Some(Role::SuperAdmin), &roleless));

        let other = User::new(2, "Joe", "User", "joe@example.com");
        assert_eq!(displayed_role(None, &other), Some(Role::User));
    }

    #[test]
    fn test_assignable_roles_fallback() {
        let data = AdminData::default();
        assert_eq!(data.assignable_roles(), Role::ALL.to_vec());
    }
}
