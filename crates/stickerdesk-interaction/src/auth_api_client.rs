//! REST adapter for the admin login endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use stickerdesk_core::auth::{AuthApi, LoginResponse, SignInWithPasswordParams};
use stickerdesk_core::config::ClientConfig;
use stickerdesk_core::{DeskError, Result};

use crate::{build_http_client, endpoint, transport_error};

/// Error body some backends send along with a non-2xx login answer.
#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`AuthApi`] calling `POST {base}/auth/admin/login` with a JSON body.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.auth_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &SignInWithPasswordParams) -> Result<LoginResponse> {
        let url = endpoint(&self.base_url, &["auth", "admin", "login"])?;
        tracing::debug!(%url, email = %credentials.email, "Signing in");

        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            // Prefer the server's own explanation when it sent one
            let message = serde_json::from_str::<LoginErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("Login failed with status {}", status.as_u16()));
            return Err(DeskError::auth(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
