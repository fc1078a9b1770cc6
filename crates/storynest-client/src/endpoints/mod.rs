//! Typed wrappers over the admin API surface.

pub mod admin_users;
pub mod auth;
pub mod books;
pub mod customers;
pub mod delivery_types;
pub mod orders;
pub mod stickers;
