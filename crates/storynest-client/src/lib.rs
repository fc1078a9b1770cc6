//! # storynest-client
//!
//! Typed REST client for the remote Storynest commerce API. The HTTP layer
//! reads the bearer token from the session store on every request; the
//! endpoint modules wrap the admin API surface (auth, books, stickers,
//! orders, customers, admin users, delivery types) with typed requests and
//! responses, including the 0-based page translation the Spring-backed
//! endpoints need.

pub mod endpoints;
pub mod http;
pub mod spring;

pub use endpoints::admin_users::AdminUserApi;
pub use endpoints::auth::{AuthApi, AuthResponse};
pub use endpoints::books::BookApi;
pub use endpoints::customers::CustomerApi;
pub use endpoints::delivery_types::DeliveryTypeApi;
pub use endpoints::orders::OrderApi;
pub use endpoints::stickers::StickerApi;
pub use http::ApiClient;
