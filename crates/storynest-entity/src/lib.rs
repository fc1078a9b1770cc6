//! # storynest-entity
//!
//! Domain entity models for the Storynest admin console. Every struct in
//! this crate mirrors a record exchanged with the remote commerce API and
//! derives `Debug`, `Clone`, `Serialize`, and `Deserialize` with camelCase
//! wire names. Mutation requests additionally derive `validator::Validate`
//! so invalid input is rejected before a request is issued.

pub mod admin;
pub mod book;
pub mod customer;
pub mod delivery;
pub mod order;
pub mod pricing;
pub mod sticker;
