//! Server-side cart and wishlist mirror.
//!
//! The marketplace also keeps a per-account copy of the cart and wishlist.
//! The local stores remain the working state; these endpoints let a client
//! push a mutation to the account copy or pull it after signing in on a new
//! machine. Every mutation returns the authoritative collection, which the
//! caller feeds into `CartStore::replace` / `WishlistStore::replace`.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use harbor_core::{CartLine, ProductId, WishlistEntry};

use super::{ApiClient, ApiError};

/// Response from clearing the account cart.
#[derive(Debug, Clone, Deserialize)]
pub struct ClearedCart {
    pub message: String,
    pub cart: Vec<CartLine>,
}

#[derive(Debug, Serialize)]
struct QuantityBody {
    quantity: u32,
}

impl ApiClient {
    /// Fetch the account cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn fetch_cart(&self) -> Result<Vec<CartLine>, ApiError> {
        self.get("/cart").await
    }

    /// Add a line to the account cart (merged by product id server-side).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, line), fields(product_id = %line.product_id))]
    pub async fn push_cart_line(&self, line: &CartLine) -> Result<Vec<CartLine>, ApiError> {
        self.post("/cart/add", line).await
    }

    /// Set a line's quantity in the account cart. The server removes the
    /// line when the quantity is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not in the account cart or the
    /// request fails.
    #[instrument(skip(self), fields(product_id = %product_id, quantity))]
    pub async fn update_cart_quantity(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartLine>, ApiError> {
        self.put(&format!("/cart/update/{product_id}"), &QuantityBody { quantity })
            .await
    }

    /// Remove a line from the account cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_cart_line(&self, product_id: &ProductId) -> Result<Vec<CartLine>, ApiError> {
        self.delete(&format!("/cart/remove/{product_id}")).await
    }

    /// Empty the account cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<ClearedCart, ApiError> {
        self.delete("/cart/clear").await
    }

    /// Fetch the account wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn fetch_wishlist(&self) -> Result<Vec<WishlistEntry>, ApiError> {
        self.get("/wishlist").await
    }

    /// Add an entry to the account wishlist. The server rejects duplicates
    /// with a 400 and a notice message.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is already wishlisted or the request
    /// fails.
    #[instrument(skip(self, entry), fields(product_id = %entry.product_id))]
    pub async fn push_wishlist_entry(
        &self,
        entry: &WishlistEntry,
    ) -> Result<Vec<WishlistEntry>, ApiError> {
        self.post("/wishlist/add", entry).await
    }

    /// Remove an entry from the account wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_wishlist_entry(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<WishlistEntry>, ApiError> {
        self.delete(&format!("/wishlist/remove/{product_id}")).await
    }
}
