//! Request and response bodies for the auth and user-management endpoints.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::user::deserialize_flag;
use super::{Role, RoleInfo, User};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Body of `POST /authenticate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

/// Form fields of the registration page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    FirstName,
    LastName,
    Email,
    Mobile,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub fn id(self) -> &'static str {
        match self {
            RegisterField::FirstName => "first_name",
            RegisterField::LastName => "last_name",
            RegisterField::Email => "email",
            RegisterField::Mobile => "mobile",
            RegisterField::Password => "password",
            RegisterField::ConfirmPassword => "confirm_password",
        }
    }
}

/// Validation messages keyed by field; empty means the form is valid.
pub type FieldErrors = BTreeMap<RegisterField, &'static str>;

impl RegisterRequest {
    pub fn field(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.first_name,
            RegisterField::LastName => &self.last_name,
            RegisterField::Email => &self.email,
            RegisterField::Mobile => &self.mobile,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set_field(&mut self, field: RegisterField, value: String) {
        let slot = match field {
            RegisterField::FirstName => &mut self.first_name,
            RegisterField::LastName => &mut self.last_name,
            RegisterField::Email => &mut self.email,
            RegisterField::Mobile => &mut self.mobile,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    /// Client-side checks run before the form is submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.first_name.trim().is_empty() {
            errors.insert(RegisterField::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(RegisterField::LastName, "Last name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(RegisterField::Email, "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert(RegisterField::Email, "Please enter a valid email address");
        }
        if self.mobile.trim().is_empty() {
            errors.insert(RegisterField::Mobile, "Mobile number is required");
        } else if self.mobile.chars().count() < 10 {
            errors.insert(
                RegisterField::Mobile,
                "Mobile number must be at least 10 digits",
            );
        }
        if self.password.is_empty() {
            errors.insert(RegisterField::Password, "Password is required");
        } else if self.password.chars().count() < 6 {
            errors.insert(
                RegisterField::Password,
                "Password must be at least 6 characters",
            );
        }
        if self.confirm_password.is_empty() {
            errors.insert(RegisterField::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(RegisterField::ConfirmPassword, "Passwords do not match");
        }

        errors
    }
}

/// Response of `/authenticate`, `/register` and `/check-auth`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub user: Option<User>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_approved: bool,
    pub message: Option<String>,
}

impl AuthResponse {
    /// The authenticated user, when the backend reported success.
    pub fn into_user(self) -> Option<User> {
        if self.success {
            self.user
        } else {
            None
        }
    }
}

/// Body of a non-success response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(alias = "error")]
    pub message: Option<String>,
    #[serde(default)]
    pub account_suspended: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RolesEnvelope {
    #[serde(default)]
    pub roles: Vec<RoleInfo>,
}

/// Body of `PUT /users/{id}/role`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoleUpdate {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            mobile: "5550001111".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = RegisterRequest::default().validate();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[&RegisterField::FirstName], "First name is required");
        assert_eq!(errors[&RegisterField::LastName], "Last name is required");
        assert_eq!(errors[&RegisterField::Email], "Email is required");
        assert_eq!(errors[&RegisterField::Mobile], "Mobile number is required");
        assert_eq!(errors[&RegisterField::Password], "Password is required");
        assert_eq!(
            errors[&RegisterField::ConfirmPassword],
            "Please confirm your password"
        );
    }

    #[test]
    fn test_format_rules() {
        let mut form = valid_form();
        form.email = "ada@localhost".to_string();
        form.mobile = "12345".to_string();
        form.password = "abc".to_string();
        form.confirm_password = "abd".to_string();

        let errors = form.validate();
        assert_eq!(errors[&RegisterField::Email], "Please enter a valid email address");
        assert_eq!(
            errors[&RegisterField::Mobile],
            "Mobile number must be at least 10 digits"
        );
        assert_eq!(
            errors[&RegisterField::Password],
            "Password must be at least 6 characters"
        );
        assert_eq!(errors[&RegisterField::ConfirmPassword], "Passwords do not match");
        assert!(!errors.contains_key(&RegisterField::FirstName));
    }

    #[test]
    fn test_email_with_whitespace_is_rejected() {
        let mut form = valid_form();
        form.email = "ada lovelace@example.com".to_string();
        assert!(form.validate().contains_key(&RegisterField::Email));
    }

    #[test]
    fn test_set_field() {
        let mut form = RegisterRequest::default();
        form.set_field(RegisterField::Mobile, "5551234567".to_string());
        assert_eq!(form.field(RegisterField::Mobile), "5551234567");
        assert_eq!(RegisterField::ConfirmPassword.id(), "confirm_password");
    }

    #[test]
    fn test_register_request_wire_format() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["confirm_password"], "secret1");
    }

    #[test]
    fn test_auth_response_into_user() {
        let json = r#"{"success": false, "user": {"id": 1, "email": "x@y.z"}}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_user().is_none());

        let json = r#"{"success": true, "user": {"id": 1, "email": "x@y.z"}, "is_approved": 1}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_approved);
        assert_eq!(response.into_user().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_error_body_aliases() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
        assert!(!body.account_suspended);
    }

    #[test]
    fn test_envelopes_default_to_empty() {
        let users: UsersEnvelope = serde_json::from_str("{}").unwrap();
        assert!(users.users.is_empty());
        let roles: RolesEnvelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(roles.roles.is_empty());
    }
}
