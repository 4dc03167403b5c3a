//! Composition root: wires config, storage and HTTP adapters together.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use stickerdesk_application::{
    CustomAuthClient, SessionStore, StickerListController, TracingNotifier,
};
use stickerdesk_core::auth::Session;
use stickerdesk_core::config::ClientConfig;
use stickerdesk_core::notification::Notifier;
use stickerdesk_infrastructure::{ConfigService, DeskPaths, FileLocalStorage};
use stickerdesk_interaction::{HttpAuthApi, HttpStickerApi};

use super::console::ConsoleNotifier;

pub struct AppContext {
    pub config: ClientConfig,
    pub session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Loads configuration and the persisted session.
    ///
    /// `config_path` overrides the `config.toml` location from `paths`. With
    /// `quiet`, notices are logged instead of printed.
    pub fn build(paths: &DeskPaths, config_path: Option<&Path>, quiet: bool) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path.to_path_buf()),
            None => ConfigService::new(paths)?,
        };
        let config = config_service.get_config()?;

        let storage = FileLocalStorage::new(paths)?;
        let session = Arc::new(SessionStore::new(Arc::new(storage)));
        session.init()?;

        let notifier: Arc<dyn Notifier> = if quiet {
            Arc::new(TracingNotifier)
        } else {
            Arc::new(ConsoleNotifier)
        };

        tracing::debug!(api = %config.api_base_url, auth = %config.auth_base_url, quiet, "Context ready");
        Ok(Self {
            config,
            session,
            notifier,
        })
    }

    pub fn auth_client(&self) -> Result<CustomAuthClient> {
        let api = HttpAuthApi::from_config(&self.config)?;
        Ok(
            CustomAuthClient::new(Arc::new(api), self.session.clone())
                .with_allowed_role(self.config.allowed_role.clone()),
        )
    }

    /// Route guard: sticker commands only run with a stored session.
    pub fn require_session(&self) -> Result<Session> {
        self.session
            .current_session()?
            .ok_or_else(|| anyhow!("not signed in: run `stickerdesk login` first"))
    }

    /// Controller whose requests carry the session token as a bearer token.
    pub fn sticker_controller(&self, session: &Session) -> Result<StickerListController> {
        let api = HttpStickerApi::from_config(&self.config)?.with_bearer_token(session.token.clone());
        Ok(StickerListController::from_config(
            Arc::new(api),
            self.notifier.clone(),
            &self.config,
        ))
    }
}
