//! Marketplace REST API client.
//!
//! # Architecture
//!
//! - One stateless request function per remote operation, grouped by
//!   concern: [`auth`], [`products`], [`orders`], [`account`] (server-side
//!   cart/wishlist mirror), and [`dashboard`].
//! - The server is the source of truth - no local sync, no caching, no
//!   retries. A failed call is simply re-initiated by the caller.
//! - A bearer credential, when present, is attached to every request. It is
//!   read once at construction: from the config override, else from the
//!   credential persisted at login.
//!
//! # Example
//!
//! ```rust,ignore
//! use harbor_client::{ApiClient, ClientConfig, FileStorage};
//!
//! let config = ClientConfig::from_env()?;
//! let storage = FileStorage::new(&config.data_dir);
//! let api = ApiClient::new(&config, &storage);
//!
//! let products = api.products().await?;
//! let orders = api.customer_orders().await?;
//! ```

mod account;
mod auth;
mod dashboard;
mod orders;
mod products;

pub use account::ClearedCart;
pub use auth::{AuthSession, Profile, RegisterRequest, Registered};
pub use dashboard::{
    ActiveOrder, DashboardOrder, LowStockCount, OrderStatusCounts, RecentOrders, RevenuePoint,
    SalesData, SalesPerformance, SalesPeriod, TotalOrders, TotalSpent, WishlistItemsCount,
};
pub use orders::SellerStatusUpdate;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::storage::{Storage, keys};

/// Errors that can occur when calling the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// server-provided `message` field, or the HTTP status text when the
    /// body carries none.
    #[error("API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// A success response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error body shape used across the marketplace API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the marketplace REST API.
///
/// Cheaply cloneable; all state is behind an `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// The bearer credential is the config override when set, else the
    /// credential persisted under [`keys::AUTH_TOKEN`], else none
    /// (unauthenticated endpoints still work).
    #[must_use]
    pub fn new(config: &ClientConfig, storage: &dyn Storage) -> Self {
        let token = config
            .auth_token
            .clone()
            .or_else(|| storage.get(keys::AUTH_TOKEN).map(SecretString::from));

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                token,
            }),
        }
    }

    /// Whether a bearer credential is attached to requests.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.is_some()
    }

    /// Build a request for an API path (must start with `/`).
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let mut builder = self
            .inner
            .client
            .request(method, url)
            .header("Content-Type", "application/json");

        if let Some(token) = &self.inner.token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder
    }

    /// Send a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &text);
            tracing::warn!(
                status = %status,
                message = %message,
                "Marketplace API returned non-success status"
            );
            return Err(ApiError::Api { status, message });
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse marketplace API response"
            );
            ApiError::Parse(e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::GET, path)).await
    }

    async fn post<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::POST, path).json(body))
            .await
    }

    async fn put<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::PUT, path).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(reqwest::Method::DELETE, path))
            .await
    }
}

/// Extract the server `message` field, falling back to the status text.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        },
        |parsed| parsed.message,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_message() {
        let message = error_message(
            reqwest::StatusCode::BAD_REQUEST,
            "{\"message\": \"Item not found in cart\"}",
        );
        assert_eq!(message, "Item not found in cart");
    }

    #[test]
    fn test_error_message_falls_back_to_status_text() {
        let message = error_message(reqwest::StatusCode::NOT_FOUND, "<html>gateway page</html>");
        assert_eq!(message, "Not Found");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: reqwest::StatusCode::UNAUTHORIZED,
            message: "Invalid credentials.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (401 Unauthorized): Invalid credentials."
        );
    }
}
