//! # User model
//!
//! [`User`] mirrors the JSON user object returned by `/authenticate`, `/check-auth`,
//! `/register` and the `/users` listings. The backend is not consistent about flag
//! encoding (`is_active`/`is_approved` arrive as booleans from the auth endpoints and as
//! `0`/`1` from the user listings), so both flags go through [`deserialize_flag`].
//!
//! Approval for routing purposes is [`User::approved`]: the explicit flag, or an admin
//! role. Admins are never parked on the pending-approval page.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::Role;

/// A console account as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub role: Option<Role>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default = "default_active", deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_approved: bool,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
    pub approved_at: Option<String>,
}

/// Status badge shown in the admin user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Pending,
    Active,
    Inactive,
}

impl User {
    /// A fresh, unapproved account with the `USER` role.
    pub fn new(id: i64, first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            mobile: None,
            role: Some(Role::User),
            permissions: Vec::new(),
            is_active: true,
            is_approved: false,
            created_at: None,
            last_login: None,
            approved_at: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn approved_flag(mut self, approved: bool) -> Self {
        self.is_approved = approved;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(Role::is_admin)
    }

    /// Whether this user may enter the dashboard.
    pub fn approved(&self) -> bool {
        self.is_approved || self.is_admin()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Full name, falling back to email if both name parts are blank.
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }

    pub fn role_label(&self) -> &'static str {
        self.role.map(Role::as_str).unwrap_or("USER")
    }

    pub fn status(&self) -> AccountStatus {
        if !self.is_approved {
            AccountStatus::Pending
        } else if self.is_active {
            AccountStatus::Active
        } else {
            AccountStatus::Inactive
        }
    }

    /// The registration date formatted for display, e.g. `"Mar 4, 2025"`.
    ///
    /// Accepts RFC 3339, RFC 2822 (the backend's HTTP-date style) and plain
    /// `YYYY-MM-DD HH:MM:SS`; anything else is returned unchanged.
    pub fn requested_on(&self) -> Option<String> {
        self.created_at.as_deref().map(format_date)
    }
}

fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

fn default_active() -> bool {
    true
}

/// Accept `true`/`false`, `0`/`1` or `null` for a boolean flag.
pub(super) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_iff_flag_or_admin() {
        for role in Role::ALL {
            for flag in [false, true] {
                let user = User::new(1, "Ada", "Lovelace", "ada@example.com")
                    .with_role(role)
                    .approved_flag(flag);
                assert_eq!(user.approved(), flag || role.is_admin(), "{role} / {flag}");
            }
        }
    }

    #[test]
    fn test_missing_role_is_not_admin() {
        let mut user = User::new(1, "No", "Role", "norole@example.com");
        user.role = None;
        assert!(!user.is_admin());
        assert!(!user.approved());
        assert_eq!(user.role_label(), "USER");
    }

    #[test]
    fn test_deserialize_integer_flags() {
        let json = r#"{
            "id": 7,
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "mobile": "5550001111",
            "role": "MANAGER",
            "is_active": 1,
            "is_approved": 0,
            "created_at": "2025-03-04T10:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_active);
        assert!(!user.is_approved);
        assert_eq!(user.role, Some(Role::Manager));
        assert_eq!(user.status(), AccountStatus::Pending);
        assert_eq!(user.requested_on().as_deref(), Some("Mar 4, 2025"));
    }

    #[test]
    fn test_deserialize_minimal_session_user() {
        let json = r#"{"id": 1, "email": "admin@example.com", "first_name": "Admin",
                       "last_name": "", "role": "SUPER_ADMIN", "is_approved": null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_active);
        assert!(!user.is_approved);
        assert!(user.approved());
        assert!(user.permissions.is_empty());
        assert_eq!(user.display_name(), "Admin");
    }

    #[test]
    fn test_status() {
        let user = User::new(2, "A", "B", "a@b.co").approved_flag(true);
        assert_eq!(user.status(), AccountStatus::Active);

        let mut inactive = user.clone();
        inactive.is_active = false;
        assert_eq!(inactive.status(), AccountStatus::Inactive);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User::new(3, " ", "", "someone@example.com");
        assert_eq!(user.display_name(), "someone@example.com");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("Tue, 04 Mar 2025 10:00:00 GMT"), "Mar 4, 2025");
        assert_eq!(format_date("2025-03-04 10:00:00"), "Mar 4, 2025");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
