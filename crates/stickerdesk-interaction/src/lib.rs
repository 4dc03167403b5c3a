//! HTTP adapters for the sticker backend.
//!
//! Each adapter implements one of the core ports on top of `reqwest`. A call
//! is exactly one request: no retry, no backoff, the timeout is the client's.

pub mod auth_api_client;
pub mod sticker_api_client;

pub use auth_api_client::HttpAuthApi;
pub use sticker_api_client::HttpStickerApi;

use std::time::Duration;

use reqwest::{Client, Url};
use stickerdesk_core::{DeskError, Result};

/// Builds the shared HTTP client with the configured request timeout.
pub(crate) fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DeskError::network(format!("Failed to build HTTP client: {e}")))
}

/// Parses `base_url` and appends `segments` as individual path segments.
///
/// Segments are percent-encoded, so an id can never escape its position.
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| DeskError::config(format!("Invalid base URL '{base_url}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| DeskError::config(format!("Base URL cannot hold a path: {base_url}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Converts a `reqwest` failure into a Network error, or a Serialization
/// error when the body arrived but did not decode.
pub(crate) fn transport_error(err: reqwest::Error) -> DeskError {
    if err.is_decode() {
        return DeskError::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        };
    }
    match err.status() {
        Some(status) => DeskError::http_status(status.as_u16(), err.to_string()),
        None => DeskError::network(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_segments() {
        let url = endpoint("http://localhost:3000/api/v1", &["stickers"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/v1/stickers");

        let url = endpoint("http://localhost:3000/api/v1/", &["sticker", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/v1/sticker/abc");
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let url = endpoint("http://h/api", &["sticker", "a/b c"]).unwrap();
        assert_eq!(url.path(), "/api/sticker/a%2Fb%20c");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(matches!(
            endpoint("not a url", &["x"]),
            Err(DeskError::Config(_))
        ));
    }
}
