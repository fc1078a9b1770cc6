//! Delivery type entities.

pub mod model;

pub use model::{CreateDeliveryTypeRequest, DeliveryType, UpdateDeliveryTypeRequest};
