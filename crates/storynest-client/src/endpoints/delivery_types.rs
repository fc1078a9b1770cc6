//! Delivery-type endpoints.

use std::sync::Arc;

use validator::Validate;

use storynest_core::types::{PageRequest, PageResponse};
use storynest_core::{AppError, AppResult};
use storynest_entity::delivery::{
    CreateDeliveryTypeRequest, DeliveryType, UpdateDeliveryTypeRequest,
};

use crate::http::ApiClient;

/// Wrapper for the delivery-type endpoints.
#[derive(Debug, Clone)]
pub struct DeliveryTypeApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl DeliveryTypeApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List delivery types. This endpoint pages from 1.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<DeliveryType>> {
        let query = vec![
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ];
        self.client.get_json("/admin/delivery-types", &query).await
    }

    /// Fetch a single delivery type.
    pub async fn get(&self, id: &str) -> AppResult<DeliveryType> {
        self.client
            .get_json(&format!("/admin/delivery-types/{id}"), &[])
            .await
    }

    /// Create a delivery type.
    pub async fn create(&self, request: &CreateDeliveryTypeRequest) -> AppResult<DeliveryType> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client.post_json("/admin/delivery-types", request).await
    }

    /// Update a delivery type.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateDeliveryTypeRequest,
    ) -> AppResult<DeliveryType> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .put_json(&format!("/admin/delivery-types/{id}"), request)
            .await
    }

    /// Delete a delivery type.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.client
            .delete(&format!("/admin/delivery-types/{id}"))
            .await
    }
}
