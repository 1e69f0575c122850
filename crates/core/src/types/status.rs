//! Status enums for orders and payment transactions.
//!
//! Wire values are the capitalized strings the marketplace API uses
//! (`"Processing"`, `"Paid"`, ...), which match the variant names exactly,
//! so no serde renaming is needed.

use serde::{Deserialize, Serialize};

/// Order fulfillment status as reported by the marketplace API.
///
/// Status transitions happen server-side; the client only reads them and
/// (for sellers) requests a transition via the seller order endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Badge variant used when rendering this status.
    #[must_use]
    pub const fn badge(self) -> BadgeVariant {
        match self {
            Self::Delivered => BadgeVariant::Success,
            Self::Shipped => BadgeVariant::Info,
            Self::Processing => BadgeVariant::Warning,
            Self::Cancelled => BadgeVariant::Danger,
        }
    }

    /// Whether the order is still in flight (not delivered or cancelled).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Processing | Self::Shipped)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Processing" => Ok(Self::Processing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Outcome of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl TransactionStatus {
    /// Whether the payment settled and an order may be created from it.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Visual weight for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Info,
    Warning,
    Danger,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"Processing\""
        );
        let status: OrderStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_order_status_parse() {
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_badge_mapping() {
        assert_eq!(OrderStatus::Delivered.badge(), BadgeVariant::Success);
        assert_eq!(OrderStatus::Shipped.badge(), BadgeVariant::Info);
        assert_eq!(OrderStatus::Processing.badge(), BadgeVariant::Warning);
        assert_eq!(OrderStatus::Cancelled.badge(), BadgeVariant::Danger);
    }

    #[test]
    fn test_active_orders() {
        assert!(OrderStatus::Processing.is_active());
        assert!(OrderStatus::Shipped.is_active());
        assert!(!OrderStatus::Delivered.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
    }

    #[test]
    fn test_transaction_status() {
        assert!(TransactionStatus::Paid.is_paid());
        assert!(!TransactionStatus::Pending.is_paid());
        assert!(!TransactionStatus::Failed.is_paid());

        let status: TransactionStatus = serde_json::from_str("\"Failed\"").unwrap();
        assert_eq!(status, TransactionStatus::Failed);
    }
}
