//! Payments and orders.
//!
//! The checkout sequence is two independent calls: process the payment,
//! then - only for a `Paid` transaction - create the order referencing it.
//! The server enforces the same gate (an unpaid or already-linked
//! transaction is refused), so the client-side check is about not sending a
//! request that is known to fail, not about trust.

use serde::Serialize;
use tracing::instrument;

use harbor_core::{NewOrder, Order, OrderId, OrderStatus, PaymentReceipt, PaymentRequest};

use super::{ApiClient, ApiError, error_message};

/// Payload for a seller-side order status transition.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStatusUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CancellationRequest<'a> {
    cancellation_reason: &'a str,
}

impl ApiClient {
    /// Submit a payment for processing.
    ///
    /// A declined payment is not a transport failure: the server answers
    /// with a non-2xx status *and* a receipt whose transaction status is
    /// `Failed`. When the body carries a receipt it is returned as `Ok` so
    /// the caller can inspect the transaction status; anything else maps to
    /// the usual error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no
    /// transaction record.
    #[instrument(skip(self, request), fields(amount = %request.amount))]
    pub async fn process_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentReceipt, ApiError> {
        let builder = self
            .request(reqwest::Method::POST, "/customer/payment/process")
            .json(request);

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if let Ok(receipt) = serde_json::from_str::<PaymentReceipt>(&text) {
            return Ok(receipt);
        }

        if !status.is_success() {
            let message = error_message(status, &text);
            tracing::warn!(status = %status, message = %message, "Payment processing failed");
            return Err(ApiError::Api { status, message });
        }

        serde_json::from_str(&text).map_err(ApiError::Parse)
    }

    /// Create an order from a paid transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the linked transaction is missing, unpaid, or
    /// already used, or if the request fails.
    #[instrument(skip(self, new_order), fields(user_id = %new_order.user_id))]
    pub async fn create_order(&self, new_order: &NewOrder) -> Result<Order, ApiError> {
        self.post("/customer/orders", new_order).await
    }

    /// List the authenticated customer's orders, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn customer_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/customer/orders").await
    }

    /// Fetch one of the authenticated customer's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist (or belongs to someone
    /// else) or the request fails.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn order_details(&self, order_id: &OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/customer/orders/{order_id}")).await
    }

    /// Request cancellation of a `Processing` order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order has already progressed past
    /// `Processing` or the request fails.
    #[instrument(skip(self, reason), fields(order_id = %order_id))]
    pub async fn cancel_order(&self, order_id: &OrderId, reason: &str) -> Result<Order, ApiError> {
        self.put(
            &format!("/orders/{order_id}/cancel-by-customer"),
            &CancellationRequest {
                cancellation_reason: reason,
            },
        )
        .await
    }

    /// List orders containing the authenticated seller's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the seller has no matching orders (the server
    /// reports that as 404) or the request fails.
    #[instrument(skip(self))]
    pub async fn seller_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders/seller-orders").await
    }

    /// Fetch one seller order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or the request fails.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn seller_order(&self, order_id: &OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/orders/seller-orders/{order_id}")).await
    }

    /// Update the status of an order as its seller.
    ///
    /// # Errors
    ///
    /// Returns an error if the status is rejected or the request fails.
    #[instrument(skip(self, update), fields(order_id = %order_id))]
    pub async fn update_seller_order_status(
        &self,
        order_id: &OrderId,
        update: &SellerStatusUpdate,
    ) -> Result<Order, ApiError> {
        self.put(&format!("/orders/seller-orders/{order_id}"), update)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_status_update_omits_unset_fields() {
        let update = SellerStatusUpdate {
            status: Some(OrderStatus::Shipped),
            tracking_number: Some("1Z999AA10123456784".to_owned()),
            ..SellerStatusUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "Shipped");
        assert_eq!(json["trackingNumber"], "1Z999AA10123456784");
        assert!(json.get("carrier").is_none());
        assert!(json.get("cancellationReason").is_none());
    }
}
