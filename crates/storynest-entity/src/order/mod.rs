//! Order entities.

pub mod model;
pub mod status;

pub use model::{Order, OrderItem, UpdateOrderStatusRequest};
pub use status::{OrderStatus, PaymentStatus};
