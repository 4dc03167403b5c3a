//! Reading upload payloads from disk.

use std::path::Path;

use stickerdesk_core::sticker::UploadFile;
use stickerdesk_core::{DeskError, Result};

/// Infers the MIME type from a filename extension using the `mime_guess` library.
fn infer_mime_type(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .to_string()
}

/// Reads `path` into an [`UploadFile`] named after the file and typed by its
/// extension.
pub fn read_upload_file(path: &Path) -> Result<UploadFile> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| DeskError::validation(format!("Not a file: {}", path.display())))?;

    let bytes = std::fs::read(path).map_err(|e| {
        DeskError::validation(format!("Failed to read {}: {}", path.display(), e))
    })?;

    tracing::debug!(file = %path.display(), size = bytes.len(), "Read upload file");

    let content_type = infer_mime_type(&file_name);
    Ok(UploadFile::new(file_name, bytes).with_content_type(content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_bytes_and_guesses_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("smile.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = read_upload_file(&path).unwrap();
        assert_eq!(file.file_name, "smile.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert_eq!(file.len(), 4);
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.zzz");
        std::fs::write(&path, b"data").unwrap();

        let file = read_upload_file(&path).unwrap();
        assert_eq!(file.content_type.as_deref(), Some("application/octet-stream"));
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_upload_file(&temp_dir.path().join("nope.png")).unwrap_err();
        assert!(err.is_validation());
    }
}
