//! Client configuration model.
//!
//! Loading (file + environment overrides) lives in the infrastructure crate;
//! this module only defines the shape and the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::auth::SUPERADMIN_ROLE;

/// Default base URL of the sticker REST API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
/// Default base URL of the admin login endpoint.
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8000/api/v1";
/// Default base URL that sticker `file_path`s are served from.
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3000";
/// Number of rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 4;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Root configuration for the admin client (`config.toml`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL for `/stickers` and `/sticker/{id}`
    pub api_base_url: String,
    /// Base URL for `/auth/admin/login`
    pub auth_base_url: String,
    /// Base URL prepended to a sticker's `file_path` to display it
    pub asset_base_url: String,
    pub page_size: usize,
    /// The only role allowed to sign in
    pub allowed_role: String,
    /// Pull the current page back into range after the list shrinks.
    /// Off by default so paging behaves exactly like the dashboard did.
    pub clamp_page_on_shrink: bool,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            allowed_role: SUPERADMIN_ROLE.to_string(),
            clamp_page_on_shrink: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Page size with a floor of one, so pagination never divides by zero.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
