//! Error type shared by every backend call.

use thiserror::Error;

/// Errors returned by the REST client and the in-memory backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Login was refused because the account has been deactivated.
    #[error("{0}")]
    AccountSuspended(String),

    /// A success response whose body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The human-readable message the backend attached to this error, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::AccountSuspended(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_account_suspended(&self) -> bool {
        matches!(self, ApiError::AccountSuspended(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// Message to show in a toast: the backend's own message when present,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Toast title for this error.
    pub fn title(&self) -> &'static str {
        if self.is_account_suspended() {
            "Account Suspended"
        } else {
            "Error"
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message("Failed"), "Email already registered");
        assert_eq!(err.title(), "Error");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Failed to load data"), "Failed to load data");

        let blank = ApiError::Status {
            status: 500,
            message: Some("   ".to_string()),
        };
        assert_eq!(blank.user_message("Failed to load data"), "Failed to load data");
    }

    #[test]
    fn test_suspended_is_tagged() {
        let err = ApiError::AccountSuspended("Your account is suspended".to_string());
        assert!(err.is_account_suspended());
        assert_eq!(err.title(), "Account Suspended");
        assert_eq!(err.user_message("Failed"), "Your account is suspended");
        assert_eq!(err.to_string(), "Your account is suspended");
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 401,
            message: None,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "request failed with status 401");

        let err = ApiError::Status {
            status: 403,
            message: Some("Forbidden".to_string()),
        };
        assert_eq!(err.to_string(), "request failed with status 403: Forbidden");
    }
}
