//! Sticker backend port.

use async_trait::async_trait;

use super::model::{StickerRecord, UploadFile};
use crate::error::Result;

/// Remote store of sticker records.
///
/// Implementations talk to the REST backend; tests substitute in-memory fakes.
/// Every method is a single request with no retry.
#[async_trait]
pub trait StickerApi: Send + Sync {
    /// Fetches every record, in server order (`GET /stickers`).
    async fn list(&self) -> Result<Vec<StickerRecord>>;

    /// Uploads an image with its label (`POST /sticker`, multipart).
    async fn create(&self, file: &UploadFile, code: &str) -> Result<()>;

    /// Deletes one record (`DELETE /sticker/{id}`).
    async fn delete(&self, id: &str) -> Result<()>;
}
