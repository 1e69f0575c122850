//! Dashboard summary widgets.
//!
//! Each widget is its own endpoint with its own small response shape. The
//! calls are independent, so a dashboard view fires them concurrently and
//! renders whatever arrives; there is no shared state between them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use harbor_core::{OrderId, OrderItem, OrderStatus};

use super::{ApiClient, ApiError};

// =============================================================================
// Customer Widgets
// =============================================================================

/// `GET /customer/dashboard/total-orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalOrders {
    pub total_orders: u64,
}

/// `GET /customer/dashboard/wishlist-items-count`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemsCount {
    pub wishlist_items_count: u64,
}

/// `GET /customer/dashboard/total-spent`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalSpent {
    pub total_spent: Decimal,
}

/// An order as projected into the dashboard widgets: only the fields the
/// summary endpoints select (id, items, status, total, dates).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOrder {
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub summary: DashboardOrderTotal,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// The only summary field the dashboard projection keeps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOrderTotal {
    pub total: Decimal,
}

/// `GET /customer/dashboard/recent-orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrders {
    pub recent_orders: Vec<DashboardOrder>,
}

/// `GET /customer/dashboard/active-order`. `active_order` is `null` when
/// nothing is in flight - that is not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOrder {
    pub active_order: Option<DashboardOrder>,
}

// =============================================================================
// Seller Widgets
// =============================================================================

/// Reporting period for seller sales data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    Today,
    Week,
    Month,
    Year,
}

impl SalesPeriod {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl std::str::FromStr for SalesPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("invalid sales period: {s}")),
        }
    }
}

/// `GET /seller/dashboard/sales-data`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    pub period: String,
    pub total_sales: Decimal,
    pub total_orders_count: u64,
}

/// `GET /seller/dashboard/sales-performance`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPerformance {
    pub current_month_sales: Decimal,
    pub previous_month_sales: Decimal,
    pub performance_trend: String,
    pub percentage_change: Decimal,
}

/// `GET /seller/dashboard/order-status-counts`. The wire keys are the
/// capitalized status strings; absent statuses count as zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderStatusCounts {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub processing: u64,
    #[serde(default)]
    pub shipped: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub cancelled: u64,
}

/// One point of `GET /seller/dashboard/revenue-trend`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: Decimal,
}

/// `GET /seller/dashboard/low-stock-count`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockCount {
    pub low_stock_product_count: u64,
    pub threshold: u32,
}

impl ApiClient {
    /// Total number of orders the customer has placed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customer_total_orders(&self) -> Result<TotalOrders, ApiError> {
        self.get("/customer/dashboard/total-orders").await
    }

    /// Number of entries in the account wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customer_wishlist_items_count(&self) -> Result<WishlistItemsCount, ApiError> {
        self.get("/customer/dashboard/wishlist-items-count").await
    }

    /// Total spent across delivered orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customer_total_spent(&self) -> Result<TotalSpent, ApiError> {
        self.get("/customer/dashboard/total-spent").await
    }

    /// The customer's most recent orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customer_recent_orders(&self, limit: u32) -> Result<RecentOrders, ApiError> {
        self.get(&format!("/customer/dashboard/recent-orders?limit={limit}"))
            .await
    }

    /// The customer's most recent in-flight order, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customer_active_order(&self) -> Result<ActiveOrder, ApiError> {
        self.get("/customer/dashboard/active-order").await
    }

    /// Sales totals for a reporting period.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(period = period.as_str()))]
    pub async fn seller_sales_data(&self, period: SalesPeriod) -> Result<SalesData, ApiError> {
        self.get(&format!(
            "/seller/dashboard/sales-data?period={}",
            period.as_str()
        ))
        .await
    }

    /// Month-over-month sales performance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn seller_sales_performance(&self) -> Result<SalesPerformance, ApiError> {
        self.get("/seller/dashboard/sales-performance").await
    }

    /// Order counts per status for the seller's items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn seller_order_status_counts(&self) -> Result<OrderStatusCounts, ApiError> {
        self.get("/seller/dashboard/order-status-counts").await
    }

    /// Monthly revenue trend for charting.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn seller_revenue_trend(&self) -> Result<Vec<RevenuePoint>, ApiError> {
        self.get("/seller/dashboard/revenue-trend").await
    }

    /// Count of listings at or below the low-stock threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn seller_low_stock_count(
        &self,
        threshold: Option<u32>,
    ) -> Result<LowStockCount, ApiError> {
        match threshold {
            Some(threshold) => {
                self.get(&format!(
                    "/seller/dashboard/low-stock-count?threshold={threshold}"
                ))
                .await
            }
            None => self.get("/seller/dashboard/low-stock-count").await,
        }
    }
}
