//! Command implementations, one module per subcommand group.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod seller;
pub mod wishlist;

use harbor_client::api::Profile;
use harbor_client::storage::{Storage, keys};
use harbor_client::{ApiClient, CartStore, ClientConfig, FileStorage, Result, WishlistStore};

/// Everything a command needs: configuration, the persistent storage, and
/// the API client (carrying the stored credential, if any).
pub struct Session {
    config: ClientConfig,
    storage: FileStorage,
    api: ApiClient,
}

impl Session {
    /// Load configuration and wire up storage and the API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn init() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        let storage = FileStorage::new(&config.data_dir);
        let api = ApiClient::new(&config, &storage);

        Ok(Self {
            config,
            storage,
            api,
        })
    }

    /// The marketplace API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The persistent key/value storage.
    #[must_use]
    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }

    /// Load the cart store (fresh from disk).
    #[must_use]
    pub fn cart(&self) -> CartStore {
        CartStore::load(Box::new(FileStorage::new(&self.config.data_dir)))
    }

    /// Load the wishlist store (fresh from disk).
    #[must_use]
    pub fn wishlist(&self) -> WishlistStore {
        WishlistStore::load(Box::new(FileStorage::new(&self.config.data_dir)))
    }

    /// The locally stored profile of the logged-in user, if any.
    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        let raw = self.storage.get(keys::USER)?;
        serde_json::from_str(&raw).ok()
    }

    /// The stored profile, or a "please log in" error.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` when no user is logged in.
    pub fn require_profile(&self) -> Result<Profile> {
        self.profile().ok_or_else(|| {
            harbor_client::ClientError::BadRequest(
                "Please log in first (harbor auth login).".to_string(),
            )
        })
    }
}

/// Format a decimal amount as a dollar price string.
#[must_use]
pub fn format_price(amount: rust_decimal::Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(25.5)), "$25.50");
        assert_eq!(format_price(dec!(0)), "$0.00");
    }
}
