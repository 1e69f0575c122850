//! Customer order views and cancellation.

use clap::Subcommand;

use harbor_core::{Order, OrderId, TransactionRef};

use harbor_client::Result;

use super::{Session, format_price};

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List your orders
    List,
    /// Show one order in detail
    Show {
        /// Order id
        order_id: OrderId,
    },
    /// Request cancellation of a Processing order
    Cancel {
        /// Order id
        order_id: OrderId,

        /// Why the order is being cancelled
        #[arg(short, long)]
        reason: String,
    },
}

pub async fn run(session: &Session, action: OrdersAction) -> Result<()> {
    match action {
        OrdersAction::List => {
            let orders = session.api().customer_orders().await?;
            if orders.is_empty() {
                println!("No orders yet.");
                return Ok(());
            }
            for order in orders {
                print_order_line(&order);
            }
        }
        OrdersAction::Show { order_id } => {
            let order = session.api().order_details(&order_id).await?;
            print_order_detail(&order);
        }
        OrdersAction::Cancel { order_id, reason } => {
            let order = session.api().cancel_order(&order_id, &reason).await?;
            println!("Order {} is now {}.", order.id, order.status);
        }
    }
    Ok(())
}

fn print_order_line(order: &Order) {
    println!(
        "{}  {}  {}  {} item(s)  {}",
        order.id,
        order.date.format("%Y-%m-%d"),
        order.status,
        order.total_items(),
        format_price(order.summary.total),
    );
}

fn print_order_detail(order: &Order) {
    println!("Order {}  ({})", order.id, order.status);
    println!("Placed:   {}", order.date.format("%Y-%m-%d %H:%M"));
    println!();

    for item in &order.items {
        println!(
            "  {}  {} x {} = {}",
            item.name,
            format_price(item.price),
            item.quantity,
            format_price(item.price * rust_decimal::Decimal::from(item.quantity)),
        );
    }

    println!();
    println!(
        "Ship to:  {}, {}, {}, {} {}",
        order.shipping_address.name,
        order.shipping_address.address,
        order.shipping_address.city,
        order.shipping_address.state,
        order.shipping_address.zip,
    );
    if let Some(tracking) = &order.tracking_number {
        let carrier = order.carrier.as_deref().unwrap_or("carrier");
        println!("Tracking: {tracking} ({carrier})");
    }

    let transaction = match &order.payment.transaction_id {
        Some(TransactionRef::Id(id)) => id.to_string(),
        Some(TransactionRef::Full(tx)) => format!("{} ({})", tx.id, tx.status),
        None => "-".to_owned(),
    };
    println!(
        "Payment:  {} ending {}  transaction {}",
        order.payment.method, order.payment.last4, transaction,
    );

    println!();
    println!("Subtotal: {}", format_price(order.summary.subtotal));
    println!("Shipping: {}", format_price(order.summary.shipping));
    println!("Tax:      {}", format_price(order.summary.tax));
    println!("Total:    {}", format_price(order.summary.total));

    if let Some(reason) = &order.cancellation_reason {
        println!();
        println!("Cancelled: {reason}");
    }
}
