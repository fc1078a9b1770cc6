//! Sticker pack endpoints.

use std::path::Path;
use std::sync::Arc;

use validator::Validate;

use storynest_core::types::{PageRequest, PageResponse};
use storynest_core::{AppError, AppResult};
use storynest_entity::sticker::{CreateStickerRequest, Sticker, UpdateStickerRequest};

use crate::http::ApiClient;

/// Optional filters for the sticker list endpoint.
#[derive(Debug, Clone, Default)]
pub struct StickerListFilter {
    /// Filter by pack type.
    pub pack_type: Option<String>,
    /// Minimum age bound.
    pub age_min: Option<u32>,
    /// Maximum age bound.
    pub age_max: Option<u32>,
    /// Sort expression.
    pub sort: Option<String>,
}

/// Wrapper for the sticker endpoints.
#[derive(Debug, Clone)]
pub struct StickerApi {
    /// Shared HTTP client.
    client: Arc<ApiClient>,
}

impl StickerApi {
    /// Create the wrapper.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List sticker packs. This endpoint pages from 1.
    pub async fn list(
        &self,
        page: &PageRequest,
        filter: &StickerListFilter,
    ) -> AppResult<PageResponse<Sticker>> {
        let mut query = vec![
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ];
        if let Some(pack_type) = &filter.pack_type {
            query.push(("pack_type", pack_type.clone()));
        }
        if let Some(age_min) = filter.age_min {
            query.push(("age_min", age_min.to_string()));
        }
        if let Some(age_max) = filter.age_max {
            query.push(("age_max", age_max.to_string()));
        }
        if let Some(sort) = &filter.sort {
            query.push(("sort", sort.clone()));
        }
        self.client.get_json("/stickers", &query).await
    }

    /// Fetch a sticker pack by its public slug.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Sticker> {
        self.client.get_json(&format!("/stickers/{slug}"), &[]).await
    }

    /// Create a sticker pack.
    pub async fn create(&self, request: &CreateStickerRequest) -> AppResult<Sticker> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client.post_json("/admin/stickers", request).await
    }

    /// Update a sticker pack.
    pub async fn update(&self, id: &str, request: &UpdateStickerRequest) -> AppResult<Sticker> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.client
            .put_json(&format!("/admin/stickers/{id}"), request)
            .await
    }

    /// Delete a sticker pack.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.client.delete(&format!("/admin/stickers/{id}")).await
    }

    /// Upload a preview image for an existing sticker pack.
    pub async fn upload_image(&self, id: &str, file: &Path) -> AppResult<serde_json::Value> {
        let form =
            reqwest::multipart::Form::new().part("file", super::books::file_part(file).await?);
        self.client
            .post_multipart(&format!("/admin/stickers/{id}/images"), form)
            .await
    }
}
