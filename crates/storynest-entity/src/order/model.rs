//! Order entity models.
//!
//! Orders and their nested records are explicit tagged structs rather than
//! open-ended maps, so a malformed API response fails at deserialization
//! instead of somewhere deep in display code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{OrderStatus, PaymentStatus};

/// Customer summary embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    /// Customer id.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Precomposed full name.
    pub full_name: String,
}

/// Shipping or billing address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address id.
    pub id: String,
    /// Recipient full name.
    pub full_name: String,
    /// Street address.
    pub street_address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A catalog image attached to an ordered book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookImage {
    /// Image id.
    pub id: String,
    /// Image URL.
    pub image_url: String,
    /// Image type (cover, gallery, ...).
    pub image_type: String,
    /// Display order within the gallery.
    pub display_order: u32,
    /// Accessibility alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Personalization attached to an order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    /// Personalization id.
    pub id: String,
    /// Child's first name printed in the book.
    pub child_first_name: String,
    /// Child's age.
    pub child_age: u32,
    /// Uploaded child photo URL.
    pub child_photo_url: String,
    /// Language of the generated book.
    pub language_code: String,
    /// Generation pipeline status.
    pub status: String,
    /// URL of the generated book, once ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_book_url: Option<String>,
}

/// A single line item in an order: either a book or a sticker pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Line item id.
    pub id: String,
    /// Book id, when the item is a book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    /// Book title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    /// Book slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_slug: Option<String>,
    /// Book cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_cover_image_url: Option<String>,
    /// Book gallery images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_images: Option<Vec<BookImage>>,
    /// Sticker pack id, when the item is a sticker pack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_id: Option<String>,
    /// Sticker pack title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_title: Option<String>,
    /// Sticker pack slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_slug: Option<String>,
    /// Associated personalization id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization_id: Option<String>,
    /// Associated personalization record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Personalization>,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at order time.
    pub unit_price: f64,
    /// Discount percentage applied.
    pub discount_percentage: f64,
    /// Line subtotal.
    pub subtotal: f64,
}

/// Delivery option snapshot attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDeliveryType {
    /// Delivery option name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Delivery price.
    pub price: f64,
    /// Estimated delivery time in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_days: Option<u32>,
}

/// A full order as returned by the admin order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id.
    pub id: String,
    /// Human-facing order number.
    pub order_number: String,
    /// Owning customer id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Owning customer summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<OrderCustomer>,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Sum of line subtotals.
    pub subtotal: f64,
    /// Shipping cost.
    pub shipping_cost: f64,
    /// Tax amount.
    pub tax: f64,
    /// Order-level discount amount.
    pub discount: f64,
    /// Grand total.
    pub total: f64,
    /// ISO currency code.
    pub currency_code: String,
    /// Selected shipping method name.
    pub shipping_method: String,
    /// Estimated delivery date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date: Option<String>,
    /// Actual delivery date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<String>,
    /// Carrier tracking number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// Free-form admin notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Line items.
    pub items: Vec<OrderItem>,
    /// Shipping address.
    pub shipping_address: Address,
    /// Billing address.
    pub billing_address: Address,
    /// Payment method label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Payment provider transaction id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_transaction_id: Option<String>,
    /// Snapshot of the chosen delivery option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<OrderDeliveryType>,
}

/// Payload for updating an order's fulfillment status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    /// The new status.
    pub status: OrderStatus,
    /// Carrier tracking number, usually set when shipping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// Admin note to attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
