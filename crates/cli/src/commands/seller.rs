//! Seller-side order management.

use clap::Subcommand;

use harbor_core::{OrderId, OrderStatus};

use harbor_client::Result;
use harbor_client::api::SellerStatusUpdate;

use super::{Session, format_price};

#[derive(Subcommand)]
pub enum SellerAction {
    /// List orders containing your products
    Orders,
    /// Show one seller order
    Order {
        /// Order id
        order_id: OrderId,
    },
    /// Update an order's status
    UpdateStatus {
        /// Order id
        order_id: OrderId,

        /// New status (Processing, Shipped, Delivered, Cancelled)
        #[arg(short, long)]
        status: OrderStatus,

        /// Tracking number (when shipping)
        #[arg(long)]
        tracking: Option<String>,

        /// Carrier (when shipping)
        #[arg(long)]
        carrier: Option<String>,

        /// Cancellation reason (when cancelling)
        #[arg(long)]
        reason: Option<String>,
    },
}

pub async fn run(session: &Session, action: SellerAction) -> Result<()> {
    match action {
        SellerAction::Orders => {
            let orders = session.api().seller_orders().await?;
            for order in orders {
                println!(
                    "{}  {}  {}  {} item(s)  {}",
                    order.id,
                    order.date.format("%Y-%m-%d"),
                    order.status,
                    order.total_items(),
                    format_price(order.summary.total),
                );
            }
        }
        SellerAction::Order { order_id } => {
            let order = session.api().seller_order(&order_id).await?;
            println!("Order {}  ({})", order.id, order.status);
            for item in &order.items {
                println!("  {}  x {}", item.name, item.quantity);
            }
            println!(
                "Ship to: {}, {}, {} {}",
                order.shipping_address.name,
                order.shipping_address.city,
                order.shipping_address.state,
                order.shipping_address.zip,
            );
        }
        SellerAction::UpdateStatus {
            order_id,
            status,
            tracking,
            carrier,
            reason,
        } => {
            let update = SellerStatusUpdate {
                status: Some(status),
                tracking_number: tracking,
                carrier,
                cancellation_reason: reason,
            };
            let order = session
                .api()
                .update_seller_order_status(&order_id, &update)
                .await?;
            println!("Order {} is now {}.", order.id, order.status);
        }
    }
    Ok(())
}
