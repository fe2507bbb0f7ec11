use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account role, ordered from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    User,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::User,
        Role::Viewer,
    ];

    /// Wire name, e.g. `"SUPER_ADMIN"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::User => "USER",
            Role::Viewer => "VIEWER",
        }
    }

    /// Admins see the management dashboard and never wait for approval.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// An entry of `GET /roles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleInfo {
    pub name: Role,
    #[serde(default)]
    pub hierarchy: i32,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!(
            "OWNER".parse::<Role>(),
            Err(UnknownRole("OWNER".to_string()))
        );
    }

    #[test]
    fn test_is_admin() {
        assert!(Role::SuperAdmin.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Manager.is_admin());
        assert!(!Role::User.is_admin());
        assert!(!Role::Viewer.is_admin());
    }

    #[test]
    fn test_role_info_defaults() {
        let info: RoleInfo = serde_json::from_str(r#"{"name":"MANAGER"}"#).unwrap();
        assert_eq!(info.name, Role::Manager);
        assert_eq!(info.hierarchy, 0);
        assert!(info.permissions.is_empty());
    }
}
