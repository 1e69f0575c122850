//! Catalog reads.
//!
//! These are the inventory-display inputs: the stock quantities they return
//! feed [`crate::stock`] before anything touches the cart.

use tracing::instrument;

use harbor_core::{Product, ProductId};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List all products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/customer/products").await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/customer/products/{product_id}")).await
    }
}
