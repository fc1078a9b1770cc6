//! Order endpoints.

use std::sync::Arc;

use storynest_core::AppResult;
use storynest_core::types::{PageRequest, PageResponse};
use storynest_entity::order::{Order, OrderStatus, PaymentStatus, UpdateOrderStatusRequest};

use crate::http::ApiClient;

/// Optional filters for the order list endpoint.
#[derive(Debug, Clone, Default)]
pub struct OrderListFilter {
    /// Filter by fulfillment status.
    pub status: Option<OrderStatus>,
    /// Filter by payment status.
    pub payment_status: Option<PaymentStatus>,
    /// Free-text search (order number, customer name).
    pub search: Option<String>,
}

/// Wrapper for the order endpoints.
#[derive(Debug, Clone)]
pub struct OrderApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl OrderApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List orders. This endpoint pages from 1.
    pub async fn list(
        &self,
        page: &PageRequest,
        filter: &OrderListFilter,
    ) -> AppResult<PageResponse<Order>> {
        let mut query = vec![
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ];
        if let Some(status) = filter.status {
            query.push(("status", status.to_string()));
        }
        if let Some(payment_status) = filter.payment_status {
            query.push(("paymentStatus", payment_status.to_string()));
        }
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        self.client.get_json("/admin/orders", &query).await
    }

    /// Fetch an order by its human-facing order number.
    pub async fn get(&self, order_number: &str) -> AppResult<Order> {
        self.client
            .get_json(&format!("/admin/orders/{order_number}"), &[])
            .await
    }

    /// Update an order's fulfillment status.
    pub async fn update_status(
        &self,
        order_number: &str,
        request: &UpdateOrderStatusRequest,
    ) -> AppResult<Order> {
        self.client
            .put_json(&format!("/admin/orders/{order_number}/status"), request)
            .await
    }
}
