//! Sticker pack entities.

pub mod model;

pub use model::{CreateStickerRequest, Sticker, UpdateStickerRequest};
