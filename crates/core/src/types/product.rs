//! Catalog product types.
//!
//! Trimmed to the sections the client reads: general display data, pricing,
//! and inventory. The seller-side editing surface (custom specs, SEO
//! metadata, uploads) stays server-side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, UserId};

/// A product as listed by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub general: ProductGeneral,
    pub pricing: ProductPricing,
    pub inventory: ProductInventory,
    /// The seller who listed this product. Buyers cannot purchase their
    /// own listings.
    pub seller: UserId,
}

impl Product {
    /// Price a buyer pays right now: the sale price when one is set.
    #[must_use]
    pub fn current_price(&self) -> Decimal {
        self.pricing.sale_price.unwrap_or(self.pricing.price)
    }

    /// Units available for purchase.
    #[must_use]
    pub const fn available(&self) -> u32 {
        self.inventory.quantity
    }
}

/// Display data for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGeneral {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub category: String,
}

/// Pricing data for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub enable_negotiation: bool,
}

/// Inventory data for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInventory {
    /// Units in stock. Zero means out of stock.
    pub quantity: u32,
    pub sku: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_current_price_prefers_sale_price() {
        let json = r#"{
            "id": "prod001",
            "general": {"title": "Wireless Mouse", "description": "A mouse.", "images": ["mouse.jpg"], "category": "Electronics"},
            "pricing": {"price": 29.99, "salePrice": 25.5, "enableNegotiation": false},
            "inventory": {"quantity": 12, "sku": "WM-001"},
            "seller": "seller42"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.current_price(), dec!(25.5));
        assert_eq!(product.available(), 12);
    }

    #[test]
    fn test_missing_sale_price_falls_back() {
        let json = r#"{
            "id": "prod002",
            "general": {"title": "USB Hub", "description": "", "images": [], "category": "Electronics"},
            "pricing": {"price": 15.25},
            "inventory": {"quantity": 0, "sku": "UH-002"},
            "seller": "seller42"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.current_price(), dec!(15.25));
        assert_eq!(product.available(), 0);
    }
}
