//! Sticker pack entity models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A sticker pack as returned by the sticker endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    /// Sticker pack id.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pack type (e.g. "alphabet", "animals").
    pub pack_type: String,
    /// Minimum recommended age.
    pub age_min: u32,
    /// Maximum recommended age.
    pub age_max: u32,
    /// Price before discount.
    pub base_price: f64,
    /// Discount percentage (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// Price after discount, as computed by the backend.
    pub final_price: f64,
    /// Preview image URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_images: Option<Vec<String>>,
}

/// Payload for creating a sticker pack.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStickerRequest {
    /// Title.
    #[validate(length(min = 1))]
    pub title: String,
    /// URL slug.
    #[validate(length(min = 1))]
    pub slug: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pack type.
    #[validate(length(min = 1))]
    pub pack_type: String,
    /// Minimum recommended age.
    pub age_min: u32,
    /// Maximum recommended age.
    pub age_max: u32,
    /// Price before discount.
    #[validate(range(min = 0.0))]
    pub base_price: f64,
    /// Discount percentage (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percentage: Option<f64>,
    /// Preview image URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_images: Option<Vec<String>>,
}

/// Partial payload for updating a sticker pack.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStickerRequest {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New pack type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_type: Option<String>,
    /// New minimum age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    /// New maximum age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    /// New base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub base_price: Option<f64>,
    /// New discount percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percentage: Option<f64>,
    /// New preview image URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_images: Option<Vec<String>>,
}
