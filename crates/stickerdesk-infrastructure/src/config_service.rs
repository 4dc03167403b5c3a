//! Configuration service implementation.
//!
//! Resolves the [`ClientConfig`] from three layers, later layers winning:
//! built-in defaults, `config.toml`, then `STICKERDESK_*` environment
//! variables.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use stickerdesk_core::config::ClientConfig;
use stickerdesk_core::{DeskError, Result};

use crate::paths::DeskPaths;

pub const ENV_API_BASE_URL: &str = "STICKERDESK_API_BASE_URL";
pub const ENV_AUTH_BASE_URL: &str = "STICKERDESK_AUTH_BASE_URL";
pub const ENV_ASSET_BASE_URL: &str = "STICKERDESK_ASSET_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "STICKERDESK_PAGE_SIZE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "STICKERDESK_REQUEST_TIMEOUT_SECS";

/// Configuration service that loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Service reading `config.toml` from the resolved config directory.
    pub fn new(paths: &DeskPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    /// Service reading an explicit config file (`--config`, tests).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            config_path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it if not cached.
    ///
    /// A missing file is not an error; a malformed one, or a malformed
    /// environment override, is.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.load_file()?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok())?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn load_file(&self) -> Result<ClientConfig> {
        if !self.config_path.exists() {
            tracing::debug!(
                path = %self.config_path.display(),
                "No config file, using defaults"
            );
            return Ok(ClientConfig::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        tracing::info!(path = %self.config_path.display(), "Loaded config");
        Ok(config)
    }
}

/// Overlays environment variables on `config`.
///
/// `lookup` abstracts `std::env::var` so the precedence can be tested without
/// touching the process environment.
pub fn apply_env_overrides<F>(config: &mut ClientConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_API_BASE_URL) {
        config.api_base_url = value;
    }
    if let Some(value) = lookup(ENV_AUTH_BASE_URL) {
        config.auth_base_url = value;
    }
    if let Some(value) = lookup(ENV_ASSET_BASE_URL) {
        config.asset_base_url = value;
    }
    if let Some(value) = lookup(ENV_PAGE_SIZE) {
        config.page_size = parse_env(ENV_PAGE_SIZE, &value)?;
    }
    if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
        config.request_timeout_secs = parse_env(ENV_REQUEST_TIMEOUT_SECS, &value)?;
    }
    Ok(())
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DeskError::config(format!("Invalid {key} value '{value}': {e}")))
}
