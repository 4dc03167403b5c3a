//! Sticker domain module.
//!
//! # Module Structure
//!
//! - `model`: sticker records and upload payloads
//! - `repository`: the backend port the list controller talks to

mod model;
mod repository;

pub use model::{StickerListResponse, StickerRecord, UploadFile, join_url};
pub use repository::StickerApi;
