//! Sticker domain models.

use serde::{Deserialize, Serialize};

use crate::pagination::Identified;

/// A sticker image record as stored by the backend.
///
/// Records are created server-side in response to an upload. The client only
/// ever reads them in bulk or drops them after a delete; it never edits one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerRecord {
    /// Backend-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// User-supplied label, not unique
    #[serde(default)]
    pub code: String,
    /// Path of the stored image, relative to the asset base URL
    #[serde(rename = "file_path", alias = "filePath", default)]
    pub file_path: String,
}

impl StickerRecord {
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            file_path: file_path.into(),
        }
    }

    /// URL the image is displayed from.
    pub fn image_url(&self, asset_base_url: &str) -> String {
        join_url(asset_base_url, &self.file_path)
    }
}

impl Identified for StickerRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `GET /stickers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StickerListResponse {
    #[serde(default)]
    pub data: Vec<StickerRecord>,
}

/// Binary image content picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type; `None` lets the transport pick its default
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Joins a base URL and a relative path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
