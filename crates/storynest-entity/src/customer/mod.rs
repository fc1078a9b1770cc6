//! Storefront customer entities.

pub mod model;

pub use model::{Customer, CustomerPersonalization, UpdateCustomerRequest};
