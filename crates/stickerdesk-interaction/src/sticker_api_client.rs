//! REST adapter for the sticker endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use stickerdesk_core::config::ClientConfig;
use stickerdesk_core::sticker::{StickerApi, StickerListResponse, StickerRecord, UploadFile};
use stickerdesk_core::{DeskError, Result};

use crate::{build_http_client, endpoint, transport_error};

/// [`StickerApi`] backed by the REST backend.
///
/// - `GET {base}/stickers`
/// - `POST {base}/sticker` (multipart: `image`, `code`)
/// - `DELETE {base}/sticker/{id}`
#[derive(Clone)]
pub struct HttpStickerApi {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpStickerApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
            bearer_token: None,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeskError::http_status(
                status.as_u16(),
                format!("{action} failed with status {status}"),
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl StickerApi for HttpStickerApi {
    async fn list(&self) -> Result<Vec<StickerRecord>> {
        let url = endpoint(&self.base_url, &["stickers"])?;
        tracing::debug!(%url, "Fetching stickers");

        let response = self.send(self.client.get(url), "List stickers").await?;
        let body: StickerListResponse = response.json().await.map_err(transport_error)?;
        Ok(body.data)
    }

    async fn create(&self, file: &UploadFile, code: &str) -> Result<()> {
        let url = endpoint(&self.base_url, &["sticker"])?;
        tracing::debug!(%url, file = %file.file_name, size = file.len(), "Uploading sticker");

        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type).map_err(|e| {
                DeskError::validation(format!("Invalid content type '{content_type}': {e}"))
            })?;
        }
        let form = Form::new().part("image", part).text("code", code.to_string());

        self.send(self.client.post(url).multipart(form), "Upload sticker")
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = endpoint(&self.base_url, &["sticker", id])?;
        tracing::debug!(%url, "Deleting sticker");

        self.send(self.client.delete(url), "Delete sticker").await?;
        Ok(())
    }
}
