//! Order, payment, and transaction types.
//!
//! These mirror the marketplace API's JSON contract (camelCase fields,
//! capitalized status strings). Monetary totals are reported by the server;
//! the client does not recompute or validate that
//! `subtotal + shipping + tax == total`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::id::{OrderId, ProductId, TransactionId, UserId};
use super::status::{OrderStatus, TransactionStatus};

// =============================================================================
// Order Components
// =============================================================================

/// A purchased product within an order.
///
/// Unlike a cart line, the wire field for the product reference is plain
/// `id` - the order endpoints predate the cart contract and kept the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product id.
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
}

impl From<CartLine> for OrderItem {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.product_id,
            name: line.name,
            price: line.unit_price,
            quantity: line.quantity,
            image: line.image,
            attributes: line.attributes,
        }
    }
}

/// Destination address for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Payment summary stored on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Payment method label (e.g. "Card").
    pub method: String,
    /// Last four digits of the card used.
    pub last4: String,
    pub billing_address: String,
    /// Linked transaction. The server returns either the bare id or, when
    /// the caller asked for it, the populated transaction record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionRef>,
}

/// A transaction reference that may or may not be populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionRef {
    /// Bare transaction id.
    Id(TransactionId),
    /// Fully populated transaction record.
    Full(Box<Transaction>),
}

/// Server-computed monetary totals for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

// =============================================================================
// Order
// =============================================================================

/// An order as returned by the marketplace API.
///
/// Read-only from the client's perspective: creation goes through
/// [`NewOrder`] and status transitions happen server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Public order id (e.g. `ORD-1A2B3C4D`).
    pub id: OrderId,
    pub user_id: UserId,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment: PaymentInfo,
    pub summary: OrderSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

impl Order {
    /// Total number of units across all items.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

// =============================================================================
// Order Creation
// =============================================================================

/// Payment details the client sends when creating an order.
///
/// `client_transaction_id` links the order to the transaction returned by a
/// prior payment-processing call; the server refuses orders whose
/// transaction is missing, unpaid, or already linked to another order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderPayment {
    pub method: String,
    pub last4: String,
    pub billing_address: String,
    pub client_transaction_id: TransactionId,
}

/// Payload for creating an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment: NewOrderPayment,
    pub summary: OrderSummary,
}

// =============================================================================
// Payments
// =============================================================================

/// Payload for processing a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub user_id: UserId,
    pub amount: Decimal,
    /// Opaque payment-method payload forwarded to the gateway
    /// (e.g. `{"type": "card", "last4": "4321"}`). The client never
    /// interprets it.
    pub payment_method_data: serde_json::Value,
}

/// A payment attempt record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    /// Set once the transaction has been linked to a created order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_gateway_transaction_id: Option<String>,
}

/// Response from the payment-processing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub message: String,
    pub transaction: Transaction,
}
