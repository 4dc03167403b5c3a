//! Persisted session token.
//!
//! `SessionStore` owns the single token the admin client signs in with. The
//! token lives in an injected [`LocalStorage`] under [`AUTH_TOKEN_KEY`] and is
//! cached in memory between [`SessionStore::init`] and
//! [`SessionStore::teardown`].

use std::sync::{Arc, PoisonError, RwLock};

use stickerdesk_core::Result;
use stickerdesk_core::auth::{AUTH_TOKEN_KEY, Session};
use stickerdesk_core::storage::LocalStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CachedToken {
    Unloaded,
    Loaded(Option<String>),
}

pub struct SessionStore {
    storage: Arc<dyn LocalStorage>,
    cache: RwLock<CachedToken>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            cache: RwLock::new(CachedToken::Unloaded),
        }
    }

    /// Loads the persisted token into memory. Calling it again is a no-op.
    pub fn init(&self) -> Result<()> {
        let loaded = {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            matches!(*cache, CachedToken::Loaded(_))
        };
        if !loaded {
            let token = self.load()?;
            tracing::debug!(signed_in = token.is_some(), "Session store initialized");
        }
        Ok(())
    }

    /// Drops the in-memory copy. The persisted token is left as is.
    pub fn teardown(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *cache = CachedToken::Unloaded;
    }

    /// The stored token, read from storage on first use.
    pub fn token(&self) -> Result<Option<String>> {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let CachedToken::Loaded(ref token) = *cache {
                return Ok(token.clone());
            }
        }
        self.load()
    }

    /// Persists `token`, replacing any previous one.
    pub fn store_token(&self, token: &str) -> Result<()> {
        self.storage.set_item(AUTH_TOKEN_KEY, token)?;
        self.set_cache(Some(token.to_string()));
        tracing::info!("Session token stored");
        Ok(())
    }

    /// Removes the persisted token.
    pub fn clear_token(&self) -> Result<()> {
        self.storage.remove_item(AUTH_TOKEN_KEY)?;
        self.set_cache(None);
        tracing::info!("Session token cleared");
        Ok(())
    }

    /// The current session, or `None` when no token is stored.
    ///
    /// Any token yields the fixed administrator identity; the token is not
    /// checked against the backend.
    pub fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.token()?.map(Session::new))
    }

    pub fn is_signed_in(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }

    fn load(&self) -> Result<Option<String>> {
        let token = self.storage.get_item(AUTH_TOKEN_KEY)?;
        self.set_cache(token.clone());
        Ok(token)
    }

    fn set_cache(&self, token: Option<String>) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *cache = CachedToken::Loaded(token);
    }
}
