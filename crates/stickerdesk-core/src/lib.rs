//! Domain layer for stickerdesk.
//!
//! Holds the sticker and session models, client-side pagination, the ports
//! (traits) the adapters implement, and the shared error type.

pub mod auth;
pub mod config;
pub mod error;
pub mod notification;
pub mod pagination;
pub mod sticker;
pub mod storage;

// Re-export common error type
pub use error::{DeskError, Result};
