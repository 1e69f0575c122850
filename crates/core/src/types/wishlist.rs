//! Wishlist entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A saved-for-later product reference.
///
/// The wishlist has set semantics keyed by product id: no quantity, and
/// adding an already-present product is a surfaced no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Product this entry refers to (unique key within the wishlist).
    pub product_id: ProductId,
    /// Product display name, denormalized at save time.
    pub name: String,
    /// Price at the time the product was saved.
    pub price: Decimal,
    /// Product image URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Product category, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
