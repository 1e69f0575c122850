//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HARBOR_API_URL` - Marketplace API base URL
//!   (default: `http://localhost:5000/api`)
//! - `HARBOR_DATA_DIR` - Directory for locally persisted state
//!   (default: `$HOME/.harbor`, falling back to `./.harbor`)
//! - `HARBOR_AUTH_TOKEN` - Bearer credential override. When unset, the
//!   credential stored by `harbor auth login` is used.

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the credential override.
#[derive(Clone)]
pub struct ClientConfig {
    /// Marketplace API base URL, without a trailing slash.
    pub api_url: String,
    /// Directory holding the persisted cart, wishlist, and credential.
    pub data_dir: PathBuf,
    /// Bearer credential override (takes precedence over stored credential).
    pub auth_token: Option<SecretString>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("data_dir", &self.data_dir)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HARBOR_API_URL` is set but not a valid
    /// absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("HARBOR_API_URL", "http://localhost:5000/api");
        let api_url = validate_api_url(&api_url)?;

        let data_dir = std::env::var_os("HARBOR_DATA_DIR")
            .map_or_else(default_data_dir, PathBuf::from);

        let auth_token = get_optional_env("HARBOR_AUTH_TOKEN").map(SecretString::from);

        Ok(Self {
            api_url,
            data_dir,
            auth_token,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Default data directory: `$HOME/.harbor`, or `./.harbor` without a home.
fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".harbor"),
        |home| PathBuf::from(home).join(".harbor"),
    )
}

/// Parse and normalize the API base URL (no trailing slash).
fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("HARBOR_API_URL".to_string(), e.to_string()))?;
    if !parsed.has_host() {
        return Err(ConfigError::InvalidEnvVar(
            "HARBOR_API_URL".to_string(),
            "URL must have a host".to_string(),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url_strips_trailing_slash() {
        let url = validate_api_url("http://localhost:5000/api/").unwrap();
        assert_eq!(url, "http://localhost:5000/api");
    }

    #[test]
    fn test_validate_api_url_rejects_garbage() {
        assert!(validate_api_url("not a url").is_err());
        assert!(validate_api_url("file:///tmp").is_err());
    }

    #[test]
    fn test_default_data_dir_is_stable() {
        // Either $HOME/.harbor or ./.harbor; both end with the same component.
        let dir = default_data_dir();
        assert_eq!(dir.file_name().unwrap(), ".harbor");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig {
            api_url: "http://localhost:5000/api".to_string(),
            data_dir: PathBuf::from(".harbor"),
            auth_token: Some(SecretString::from("super-secret-token")),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-token"));
    }
}
