//! Book catalog entities.

pub mod model;

pub use model::{BookDetail, BookSummary, CreateBookRequest, UpdateBookRequest};
