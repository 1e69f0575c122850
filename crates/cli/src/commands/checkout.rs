//! Checkout: pay for the cart, then place the order.
//!
//! The two network calls are gated: the order is created only when the
//! payment's transaction comes back `Paid`. On a declined payment the
//! command prints the transaction outcome and exits nonzero without ever
//! calling the order endpoint; re-running the command retries the payment.

use clap::Args;
use rust_decimal::Decimal;

use harbor_core::ShippingAddress;

use harbor_client::checkout::{self, CheckoutDetails};
use harbor_client::{ClientError, Result};

use super::{Session, format_price};

#[derive(Args)]
pub struct CheckoutArgs {
    /// Recipient name
    #[arg(long)]
    name: String,

    /// Street address
    #[arg(long)]
    address: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    state: String,

    #[arg(long)]
    zip: String,

    /// Last four digits of the card
    #[arg(long)]
    last4: String,

    /// Payment method label
    #[arg(long, default_value = "Card")]
    method: String,

    /// Billing address; defaults to the shipping address
    #[arg(long)]
    billing: Option<String>,

    /// Shipping cost added to the total
    #[arg(long, default_value = "0.00")]
    shipping: Decimal,

    /// Tax added to the total
    #[arg(long, default_value = "0.00")]
    tax: Decimal,
}

pub async fn run(session: &Session, args: CheckoutArgs) -> Result<()> {
    let profile = session.require_profile()?;
    let mut cart = session.cart();

    let shipping_address = ShippingAddress {
        name: args.name,
        address: args.address,
        city: args.city,
        state: args.state,
        zip: args.zip,
    };
    let details = CheckoutDetails {
        billing_address: args
            .billing
            .unwrap_or_else(|| CheckoutDetails::billing_from_shipping(&shipping_address)),
        shipping_address,
        payment_method: args.method,
        card_last4: args.last4,
        shipping: args.shipping,
        tax: args.tax,
    };

    let request = checkout::payment_request(&cart, &profile.user_id, &details)?;
    println!("Charging {}...", format_price(request.amount));

    let receipt = session.api().process_payment(&request).await?;
    println!(
        "{} (transaction {}, status {})",
        receipt.message, receipt.transaction.id, receipt.transaction.status
    );

    // A Failed or Pending transaction stops here; no order call is made.
    let new_order = checkout::build_order(&cart, &profile.user_id, &details, &receipt)
        .map_err(ClientError::from)?;

    let order = session.api().create_order(&new_order).await?;
    cart.clear()?;

    println!();
    println!(
        "Order {} placed ({} item(s), total {}). Status: {}",
        order.id,
        order.total_items(),
        format_price(order.summary.total),
        order.status,
    );
    Ok(())
}
