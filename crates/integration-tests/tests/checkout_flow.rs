//! Integration tests for the payment-then-order checkout flow.
//!
//! These tests require a running marketplace backend:
//! - `HARBOR_API_URL` pointing at it (default: `http://localhost:5000/api`)
//! - the backend's mock payment gateway, which declines any payment of
//!   exactly 999
//!
//! Run with: `cargo test -p harbor-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use rust_decimal::dec;

use harbor_core::{Email, TransactionStatus, UserId};
use harbor_integration_tests::{TestContext, unique_email};

use harbor_client::api::RegisterRequest;
use harbor_client::cart::{CartProduct, CartStore};
use harbor_client::checkout::{self, CheckoutDetails, CheckoutError};
use harbor_client::storage::MemoryStorage;

const PASSWORD: &str = "correct-horse-battery-staple";

/// Register a fresh customer and return an authenticated context.
async fn logged_in_customer() -> (TestContext, UserId) {
    let ctx = TestContext::new();
    let email = Email::parse(&unique_email("checkout")).unwrap();

    ctx.api()
        .register(&RegisterRequest {
            first_name: "Test".to_owned(),
            last_name: "Customer".to_owned(),
            email: email.clone(),
            password: PASSWORD.to_owned(),
            roles: None,
        })
        .await
        .expect("Failed to register test customer");

    let session = ctx
        .api()
        .login(&email, PASSWORD)
        .await
        .expect("Failed to log in test customer");
    ctx.store_token(&session.token);

    (ctx, session.user_id)
}

fn details() -> CheckoutDetails {
    let shipping_address = harbor_core::ShippingAddress {
        name: "Test Customer".to_owned(),
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

/// A cart priced so the mock gateway approves the payment.
fn approved_cart() -> CartStore {
    let mut cart = CartStore::load(Box::new(MemoryStorage::new()));
    cart.add(
        CartProduct {
            product_id: "prod001".into(),
            name: "Wireless Mouse".to_owned(),
            unit_price: dec!(25.50),
            image: None,
            attributes: None,
        },
        2,
    )
    .unwrap();
    cart
}

/// A cart priced so the total is exactly 999 and the gateway declines.
fn declined_cart() -> CartStore {
    let mut cart = CartStore::load(Box::new(MemoryStorage::new()));
    cart.add(
        CartProduct {
            product_id: "prod001".into(),
            name: "Wireless Mouse".to_owned(),
            unit_price: dec!(984.25),
            image: None,
            attributes: None,
        },
        1,
    )
    .unwrap();
    cart
}

#[tokio::test]
#[ignore = "Requires running marketplace API"]
async fn test_paid_transaction_creates_order() {
    let (ctx, user_id) = logged_in_customer().await;
    let api = ctx.api();
    let cart = approved_cart();
    let details = details();

    let request = checkout::payment_request(&cart, &user_id, &details).unwrap();
    let receipt = api
        .process_payment(&request)
        .await
        .expect("Payment processing failed");
    assert_eq!(receipt.transaction.status, TransactionStatus::Paid);

    let new_order = checkout::build_order(&cart, &user_id, &details, &receipt).unwrap();
    let order = api.create_order(&new_order).await.expect("Order creation failed");

    // The order shows up in the customer's history.
    let orders = api.customer_orders().await.expect("Failed to list orders");
    assert!(orders.iter().any(|o| o.id == order.id));

    let fetched = api
        .order_details(&order.id)
        .await
        .expect("Failed to fetch order");
    assert_eq!(fetched.summary.total, request.amount);
}

#[tokio::test]
#[ignore = "Requires running marketplace API"]
async fn test_declined_payment_blocks_order_creation() {
    let (ctx, user_id) = logged_in_customer().await;
    let api = ctx.api();
    let cart = declined_cart();
    // 984.25 + 10.00 shipping + 4.75 tax = 999, the gateway's decline value.
    let details = details();

    let request = checkout::payment_request(&cart, &user_id, &details).unwrap();
    assert_eq!(request.amount, dec!(999));

    let receipt = api
        .process_payment(&request)
        .await
        .expect("Declined payments still return a receipt");
    assert_eq!(receipt.transaction.status, TransactionStatus::Failed);

    // The gate refuses to build an order from the failed transaction.
    let result = checkout::build_order(&cart, &user_id, &details, &receipt);
    assert!(matches!(
        result,
        Err(CheckoutError::PaymentNotSettled { .. })
    ));
}

#[tokio::test]
#[ignore = "Requires running marketplace API"]
async fn test_used_transaction_cannot_back_two_orders() {
    let (ctx, user_id) = logged_in_customer().await;
    let api = ctx.api();
    let cart = approved_cart();
    let details = details();

    let request = checkout::payment_request(&cart, &user_id, &details).unwrap();
    let receipt = api.process_payment(&request).await.unwrap();
    let new_order = checkout::build_order(&cart, &user_id, &details, &receipt).unwrap();

    api.create_order(&new_order).await.expect("First order should succeed");

    // The server refuses to link the same transaction twice.
    let second = api.create_order(&new_order).await;
    assert!(second.is_err());
}
