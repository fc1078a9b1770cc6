//! Book entity models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A book row as returned by the admin book list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    /// Book id.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short teaser description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Intended audience (e.g. "boys", "girls", "everyone").
    pub ideal_for: String,
    /// Minimum recommended age.
    pub age_min: u32,
    /// Maximum recommended age.
    pub age_max: u32,
    /// Genre label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Price before discount.
    pub base_price: f64,
    /// Discount percentage (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// Price after discount, as computed by the backend.
    pub final_price: f64,
    /// Featured on the storefront.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Marked as a bestseller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bestseller: Option<bool>,
}

/// Full book detail, a superset of [`BookSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    /// The summary fields.
    #[serde(flatten)]
    pub summary: BookSummary,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional gallery image URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_image_urls: Option<Vec<String>>,
    /// Promotional video URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_urls: Option<Vec<String>>,
}

/// Payload for creating a book.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    /// Title.
    #[validate(length(min = 1))]
    pub title: String,
    /// URL slug.
    #[validate(length(min = 1))]
    pub slug: String,
    /// Short teaser description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Genre label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Intended audience.
    #[validate(length(min = 1))]
    pub ideal_for: String,
    /// Minimum recommended age.
    pub age_min: u32,
    /// Maximum recommended age.
    pub age_max: u32,
    /// Number of pages.
    pub page_count: u32,
    /// Price before discount.
    #[validate(range(min = 0.0))]
    pub base_price: f64,
    /// Discount percentage (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percentage: Option<f64>,
    /// Featured on the storefront.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Marked as a bestseller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bestseller: Option<bool>,
    /// Catalog display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

/// Partial payload for updating a book. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// New long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New genre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// New audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_for: Option<String>,
    /// New minimum age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    /// New maximum age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    /// New page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// New base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub base_price: Option<f64>,
    /// New discount percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percentage: Option<f64>,
    /// New featured flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// New bestseller flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bestseller: Option<bool>,
    /// New display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_request_validation() {
        let req = CreateBookRequest {
            title: "The Brave Little Fox".to_string(),
            slug: "brave-little-fox".to_string(),
            short_description: None,
            description: None,
            genre: None,
            ideal_for: "everyone".to_string(),
            age_min: 3,
            age_max: 8,
            page_count: 24,
            base_price: 29.99,
            discount_percentage: Some(10.0),
            is_featured: None,
            is_bestseller: None,
            display_order: None,
        };
        assert!(req.validate().is_ok());

        let mut bad = req.clone();
        bad.discount_percentage = Some(150.0);
        assert!(bad.validate().is_err());

        let mut empty_title = req;
        empty_title.title = String::new();
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_summary_wire_names() {
        let json = serde_json::json!({
            "id": "b1",
            "slug": "brave-little-fox",
            "title": "The Brave Little Fox",
            "idealFor": "everyone",
            "ageMin": 3,
            "ageMax": 8,
            "basePrice": 100.0,
            "discountPercentage": 25.0,
            "finalPrice": 75.0
        });
        let book: BookSummary = serde_json::from_value(json).unwrap();
        assert_eq!(book.ideal_for, "everyone");
        assert!((book.final_price - 75.0).abs() < 1e-9);
    }
}
