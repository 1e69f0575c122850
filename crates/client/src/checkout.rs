//! Checkout assembly: turning a cart into a payment and an order.
//!
//! Checkout is two network calls with a hard gate between them:
//!
//! 1. build a [`PaymentRequest`] for the cart total and submit it;
//! 2. **only if** the returned transaction is `Paid`, build the
//!    [`NewOrder`] referencing that transaction and submit it.
//!
//! [`build_order`] refuses to produce an order for an unsettled
//! transaction, so a `Failed` or `Pending` payment can never be followed by
//! an order-creation call.

use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

use harbor_core::{
    NewOrder, NewOrderPayment, OrderItem, OrderSummary, PaymentReceipt, PaymentRequest,
    ShippingAddress, TransactionStatus, UserId,
};

use crate::cart::CartStore;

/// Why a checkout could not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty.")]
    EmptyCart,

    #[error("Payment was not completed (status: {status}). The order was not created.")]
    PaymentNotSettled { status: TransactionStatus },
}

/// Everything the buyer supplies at checkout besides the cart itself.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub shipping_address: ShippingAddress,
    /// Payment method label (e.g. "Card").
    pub payment_method: String,
    /// Last four digits of the card used.
    pub card_last4: String,
    /// Billing address line; defaults to the shipping address when the
    /// buyer marks them the same.
    pub billing_address: String,
    pub shipping: Decimal,
    pub tax: Decimal,
}

impl CheckoutDetails {
    /// Format a shipping address as a single billing line.
    #[must_use]
    pub fn billing_from_shipping(address: &ShippingAddress) -> String {
        format!(
            "{}, {}, {}, {}",
            address.address, address.city, address.state, address.zip
        )
    }
}

/// Monetary totals for the checkout: server-style `subtotal + shipping +
/// tax = total`, computed once and reused for the payment amount and the
/// order summary.
fn summary(cart: &CartStore, details: &CheckoutDetails) -> OrderSummary {
    let subtotal = cart.total();
    OrderSummary {
        subtotal,
        shipping: details.shipping,
        tax: details.tax,
        total: subtotal + details.shipping + details.tax,
    }
}

/// Build the payment request for a checkout.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when there is nothing to pay for.
pub fn payment_request(
    cart: &CartStore,
    user_id: &UserId,
    details: &CheckoutDetails,
) -> Result<PaymentRequest, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(PaymentRequest {
        user_id: user_id.clone(),
        amount: summary(cart, details).total,
        payment_method_data: json!({
            "type": details.payment_method,
            "last4": details.card_last4,
        }),
    })
}

/// Build the order for a settled payment.
///
/// # Errors
///
/// Returns [`CheckoutError::PaymentNotSettled`] unless the receipt's
/// transaction status is `Paid`, and [`CheckoutError::EmptyCart`] when the
/// cart is empty.
pub fn build_order(
    cart: &CartStore,
    user_id: &UserId,
    details: &CheckoutDetails,
    receipt: &PaymentReceipt,
) -> Result<NewOrder, CheckoutError> {
    if !receipt.transaction.status.is_paid() {
        return Err(CheckoutError::PaymentNotSettled {
            status: receipt.transaction.status,
        });
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(NewOrder {
        user_id: user_id.clone(),
        items: cart
            .lines()
            .iter()
            .cloned()
            .map(OrderItem::from)
            .collect(),
        shipping_address: details.shipping_address.clone(),
        payment: NewOrderPayment {
            method: details.payment_method.clone(),
            last4: details.card_last4.clone(),
            billing_address: details.billing_address.clone(),
            client_transaction_id: receipt.transaction.id.clone(),
        },
        summary: summary(cart, details),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::dec;

    use harbor_core::{ProductId, Transaction, TransactionId};

    use crate::cart::CartProduct;
    use crate::storage::MemoryStorage;

    use super::*;

    fn cart() -> CartStore {
        let mut cart = CartStore::load(Box::new(MemoryStorage::new()));
        cart.add(
            CartProduct {
                product_id: ProductId::new("prod001"),
                name: "Wireless Mouse".to_owned(),
                unit_price: dec!(25.50),
                image: None,
                attributes: None,
            },
            1,
        )
        .unwrap();
        cart.add(
            CartProduct {
                product_id: ProductId::new("prod002"),
                name: "USB Hub".to_owned(),
                unit_price: dec!(15.25),
                image: None,
                attributes: None,
            },
            2,
        )
        .unwrap();
        cart
    }

    fn details() -> CheckoutDetails {
        let shipping_address = ShippingAddress {
            name: "Jane Doe".to_owned(),
            address: "456 Oak Avenue".to_owned(),
            city: "Townsville".to_owned(),
            state: "TX".to_owned(),
            zip: "75001".to_owned(),
        };
        CheckoutDetails {
            billing_address: CheckoutDetails::billing_from_shipping(&shipping_address),
            shipping_address,
            payment_method: "Card".to_owned(),
            card_last4: "4321".to_owned(),
            shipping: dec!(10.00),
            tax: dec!(4.75),
        }
    }

    fn receipt(status: TransactionStatus) -> PaymentReceipt {
        PaymentReceipt {
            message: "Payment processed.".to_owned(),
            transaction: Transaction {
                id: TransactionId::new("tx-1"),
                user_id: UserId::new("user123abc"),
                order_id: None,
                amount: dec!(70.75),
                date: Utc::now(),
                status,
                payment_gateway_transaction_id: Some("gw_deadbeef".to_owned()),
            },
        }
    }

    #[test]
    fn test_payment_amount_is_cart_total_plus_costs() {
        let request = payment_request(&cart(), &UserId::new("user123abc"), &details()).unwrap();
        // 25.50 + 2 * 15.25 = 56.00 subtotal
        assert_eq!(request.amount, dec!(70.75));
        assert_eq!(request.payment_method_data["last4"], "4321");
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let empty = CartStore::load(Box::new(MemoryStorage::new()));
        assert_eq!(
            payment_request(&empty, &UserId::new("u"), &details()),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_paid_transaction_builds_order() {
        let order = build_order(
            &cart(),
            &UserId::new("user123abc"),
            &details(),
            &receipt(TransactionStatus::Paid),
        )
        .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.payment.client_transaction_id.as_str(), "tx-1");
        assert_eq!(order.summary.subtotal, dec!(56.00));
        assert_eq!(order.summary.total, dec!(70.75));
    }

    #[test]
    fn test_failed_payment_never_becomes_an_order() {
        let result = build_order(
            &cart(),
            &UserId::new("user123abc"),
            &details(),
            &receipt(TransactionStatus::Failed),
        );
        assert_eq!(
            result,
            Err(CheckoutError::PaymentNotSettled {
                status: TransactionStatus::Failed,
            })
        );
    }

    #[test]
    fn test_pending_payment_never_becomes_an_order() {
        let result = build_order(
            &cart(),
            &UserId::new("user123abc"),
            &details(),
            &receipt(TransactionStatus::Pending),
        );
        assert!(matches!(
            result,
            Err(CheckoutError::PaymentNotSettled { .. })
        ));
    }
}
