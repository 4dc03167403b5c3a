//! Unified path management for stickerdesk files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/stickerdesk/       # Config directory (platform default)
//! ├── config.toml              # Client configuration
//! ├── storage.json             # Durable key/value storage (session token)
//! └── logs/                    # CLI logs
//!     └── stickerdesk.log.YYYY-MM-DD
//! ```
//!
//! Passing a base directory replaces `~/.config/stickerdesk/` entirely, which
//! is how tests and the CLI `--data-dir` flag isolate themselves.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "stickerdesk";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for stickerdesk_core::DeskError {
    fn from(err: PathError) -> Self {
        stickerdesk_core::DeskError::config(err.to_string())
    }
}

/// Path resolver rooted either at the platform config directory or at an
/// explicit base directory.
#[derive(Debug, Clone, Default)]
pub struct DeskPaths {
    base: Option<PathBuf>,
}

impl DeskPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the stickerdesk configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: the base directory, or e.g. `~/.config/stickerdesk/`
    /// - `Err(PathError::ConfigDirNotFound)`: no base given and no platform
    ///   config directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path of the durable key/value storage file.
    ///
    /// # Security Note
    ///
    /// The file holds the session token; it is written with mode 600 on Unix.
    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("storage.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
