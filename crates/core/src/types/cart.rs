//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One product entry in the cart with its own quantity.
///
/// The cart holds at most one line per product id; adding the same product
/// again increments the existing line's quantity. A line's quantity is
/// always at least 1 - dropping to zero is expressed by removing the line,
/// never by storing a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product this line refers to (unique key within the cart).
    pub product_id: ProductId,
    /// Product display name, denormalized at add time.
    pub name: String,
    /// Unit price at the time the product was added.
    #[serde(rename = "price")]
    pub unit_price: Decimal,
    /// Number of units. Always >= 1.
    pub quantity: u32,
    /// Product image URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Variant attributes chosen at add time (e.g. "Color: Black").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn line(quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new("prod-001"),
            name: "Wireless Mouse".to_owned(),
            unit_price: dec!(25.50),
            quantity,
            image: None,
            attributes: None,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line(1).line_total(), dec!(25.50));
        assert_eq!(line(3).line_total(), dec!(76.50));
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = serde_json::to_value(line(2)).unwrap();
        assert_eq!(json["productId"], "prod-001");
        assert_eq!(json["price"], serde_json::json!(25.5));
        assert_eq!(json["quantity"], 2);
        // Absent optionals are omitted entirely, matching the backend payloads.
        assert!(json.get("image").is_none());
    }
}
