//! Customer entity models (the storefront users managed by the console).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A storefront customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer id.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Whether the account also has admin-portal access.
    pub is_admin: bool,
    /// When the email address was verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<DateTime<Utc>>,
    /// Last login timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A personalization owned by a customer, with its catalog references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPersonalization {
    /// Personalization id.
    pub id: String,
    /// Child's first name.
    pub child_first_name: String,
    /// Child's age.
    pub child_age: u32,
    /// Uploaded child photo URL.
    pub child_photo_url: String,
    /// Language of the generated book.
    pub language_code: String,
    /// Generation pipeline status.
    pub status: String,
    /// Referenced book, if the personalization targets a book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<CatalogRef>,
    /// Referenced sticker pack, if it targets a sticker pack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<CatalogRef>,
    /// URL of the generated book, once ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_book_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Minimal reference to a catalog item (book or sticker pack).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRef {
    /// Item id.
    pub id: String,
    /// Title.
    pub title: String,
    /// URL slug.
    pub slug: String,
}

/// Partial payload for updating a customer account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    /// New given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New active flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
