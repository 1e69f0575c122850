//! Dashboard summaries.
//!
//! Widget fetches are independent, so they run concurrently and each
//! renders on its own: one failing widget shows an inline error without
//! taking the rest of the dashboard down. Re-running the command is the
//! retry.

use clap::Subcommand;

use harbor_client::api::SalesPeriod;
use harbor_client::{ApiError, Result};

use super::{Session, format_price};

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Customer overview: orders, wishlist, spend
    Customer {
        /// How many recent orders to show
        #[arg(long, default_value_t = 5)]
        recent: u32,
    },
    /// Seller overview: sales, statuses, stock
    Seller {
        /// Reporting period for sales data (today, week, month, year)
        #[arg(short, long, default_value = "today")]
        period: SalesPeriod,
    },
}

pub async fn run(session: &Session, action: DashboardAction) -> Result<()> {
    match action {
        DashboardAction::Customer { recent } => customer(session, recent).await,
        DashboardAction::Seller { period } => seller(session, period).await,
    }
}

/// Render a widget value, or the inline error state for a failed fetch.
fn widget<T>(result: &std::result::Result<T, ApiError>, render: impl Fn(&T) -> String) -> String {
    match result {
        Ok(value) => render(value),
        Err(e) => format!("unavailable ({e})"),
    }
}

async fn customer(session: &Session, recent: u32) -> Result<()> {
    let api = session.api();

    let (total_orders, wishlist_count, total_spent, recent_orders, active_order) = tokio::join!(
        api.customer_total_orders(),
        api.customer_wishlist_items_count(),
        api.customer_total_spent(),
        api.customer_recent_orders(recent),
        api.customer_active_order(),
    );

    println!("Customer dashboard");
    println!(
        "  Orders placed:  {}",
        widget(&total_orders, |w| w.total_orders.to_string())
    );
    println!(
        "  Wishlist items: {}",
        widget(&wishlist_count, |w| w.wishlist_items_count.to_string())
    );
    println!(
        "  Total spent:    {}",
        widget(&total_spent, |w| format_price(w.total_spent))
    );

    match &active_order {
        Ok(active) => match &active.active_order {
            Some(order) => {
                let eta = order
                    .estimated_delivery
                    .map_or_else(|| "-".to_owned(), |d| d.format("%Y-%m-%d").to_string());
                println!(
                    "  Active order:   {} ({}, ETA {eta})",
                    order.id, order.status
                );
            }
            None => println!("  Active order:   none"),
        },
        Err(e) => println!("  Active order:   unavailable ({e})"),
    }

    match &recent_orders {
        Ok(recent) => {
            println!();
            println!("Recent orders:");
            for order in &recent.recent_orders {
                println!(
                    "  {}  {}  {}  {}",
                    order.id,
                    order.date.format("%Y-%m-%d"),
                    order.status,
                    format_price(order.summary.total),
                );
            }
        }
        Err(e) => println!("Recent orders unavailable ({e})"),
    }

    Ok(())
}

async fn seller(session: &Session, period: SalesPeriod) -> Result<()> {
    let api = session.api();

    let (sales, performance, status_counts, trend, low_stock) = tokio::join!(
        api.seller_sales_data(period),
        api.seller_sales_performance(),
        api.seller_order_status_counts(),
        api.seller_revenue_trend(),
        api.seller_low_stock_count(None),
    );

    println!("Seller dashboard");
    println!(
        "  Sales:          {}",
        widget(&sales, |w| format!(
            "{} across {} order(s) ({})",
            format_price(w.total_sales),
            w.total_orders_count,
            w.period
        ))
    );
    println!(
        "  Performance:    {}",
        widget(&performance, |w| format!(
            "{} ({}% vs last month)",
            w.performance_trend, w.percentage_change
        ))
    );
    println!(
        "  Order statuses: {}",
        widget(&status_counts, |w| format!(
            "{} processing, {} shipped, {} delivered, {} cancelled",
            w.processing, w.shipped, w.delivered, w.cancelled
        ))
    );
    println!(
        "  Low stock:      {}",
        widget(&low_stock, |w| format!(
            "{} product(s) at or below {}",
            w.low_stock_product_count, w.threshold
        ))
    );

    match &trend {
        Ok(points) => {
            println!();
            println!("Revenue trend:");
            for point in points {
                println!("  {:<4} {}", point.month, format_price(point.revenue));
            }
        }
        Err(e) => println!("Revenue trend unavailable ({e})"),
    }

    Ok(())
}
