//! Integration tests for Harbor.
//!
//! These tests exercise the client SDK against a live marketplace API and
//! are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the marketplace backend (defaults to http://localhost:5000/api),
//! # then:
//! HARBOR_API_URL=http://localhost:5000/api cargo test -p harbor-integration-tests -- --ignored
//! ```

use harbor_client::{ApiClient, ClientConfig, MemoryStorage, Storage};

/// Base URL for the marketplace API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("HARBOR_API_URL").unwrap_or_else(|_| "http://localhost:5000/api".to_string())
}

/// An isolated test session: in-memory storage, no shared state between
/// tests.
pub struct TestContext {
    pub storage: MemoryStorage,
    pub api_url: String,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: MemoryStorage::new(),
            api_url: api_base_url(),
        }
    }

    /// Build an API client carrying whatever credential is currently in
    /// this context's storage.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        let config = ClientConfig {
            api_url: self.api_url.clone(),
            data_dir: std::env::temp_dir(),
            auth_token: None,
        };
        ApiClient::new(&config, &self.storage)
    }

    /// Store a credential so subsequent [`Self::api`] clients carry it.
    pub fn store_token(&self, token: &str) {
        // MemoryStorage writes cannot fail.
        let _ = self
            .storage
            .set(harbor_client::storage::keys::AUTH_TOKEN, token);
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A unique email per test run so registration never collides.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@harbor-tests.example", uuid::Uuid::new_v4())
}
