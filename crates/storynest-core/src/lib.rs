//! # storynest-core
//!
//! Core crate for the Storynest admin console. Contains the key/value
//! persistence trait, configuration schemas, pagination and response types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Storynest crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
