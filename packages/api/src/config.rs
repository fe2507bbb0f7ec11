//! # Backend location: `DATASYNC_API_URL`
//!
//! The console talks to a single REST backend whose base URL is resolved once at
//! startup by [`ApiConfig::from_env`]:
//!
//! 1. the runtime environment variable (native builds only, after loading `.env`);
//! 2. the value of the same variable captured at compile time (this is how the WASM
//!    bundle gets its URL, since a browser has no process environment);
//! 3. [`DEFAULT_API_URL`].
//!
//! A candidate that is empty or lacks an `http(s)://` scheme is skipped with a warning.

use crate::ApiError;

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "DATASYNC_API_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalise a base URL (trailing slashes are dropped).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::Config("base URL is empty".to_string()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got {trimmed}"
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Resolve the configuration from the environment.
    pub fn from_env() -> Self {
        Self::resolve(runtime_value(), option_env!("DATASYNC_API_URL"))
    }

    fn resolve(runtime: Option<String>, compiled: Option<&str>) -> Self {
        let candidates = runtime
            .into_iter()
            .chain(compiled.map(str::to_string));
        for candidate in candidates {
            match Self::new(candidate) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring {}: {}", API_URL_VAR, e),
            }
        }
        Self::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/users/pending`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_value() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_value() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = ApiConfig::new("https://backend.example.com/api//").unwrap();
        assert_eq!(config.base_url(), "https://backend.example.com/api");
        assert_eq!(
            config.endpoint("/users/pending"),
            "https://backend.example.com/api/users/pending"
        );
        assert_eq!(config.endpoint("roles"), "https://backend.example.com/api/roles");
    }

    #[test]
    fn test_new_rejects_bad_urls() {
        assert!(matches!(ApiConfig::new("  "), Err(ApiError::Config(_))));
        assert!(matches!(ApiConfig::new("/api"), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_resolve_order() {
        let config = ApiConfig::resolve(
            Some("http://runtime:8000/api".to_string()),
            Some("http://compiled:9000/api"),
        );
        assert_eq!(config.base_url(), "http://runtime:8000/api");

        let config = ApiConfig::resolve(None, Some("http://compiled:9000/api/"));
        assert_eq!(config.base_url(), "http://compiled:9000/api");

        let config = ApiConfig::resolve(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_skips_invalid_candidates() {
        let config = ApiConfig::resolve(Some("not a url".to_string()), Some("https://ok/api"));
        assert_eq!(config.base_url(), "https://ok/api");

        let config = ApiConfig::resolve(Some(String::new()), None);
        assert_eq!(config.base_url(), DEFAULT_API_URL);
    }
}
