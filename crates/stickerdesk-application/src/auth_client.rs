//! Admin authentication client.
//!
//! [`CustomAuthClient`] is the full [`AuthClient`] capability set. Password
//! sign-in goes to the backend; sign-up only mints a local token and the
//! remaining flows are not implemented.

use std::sync::Arc;

use async_trait::async_trait;
use rand::RngCore;
use stickerdesk_core::auth::{
    AdminUser, AuthApi, AuthClient, ResetPasswordParams, SUPERADMIN_ROLE, SignInWithOAuthParams,
    SignInWithPasswordParams, SignUpParams,
};
use stickerdesk_core::{DeskError, Result};

use crate::session_store::SessionStore;

pub const MSG_ROLE_REQUIRED: &str = "Access denied. SUPERADMIN role required.";
pub const MSG_NO_TOKEN: &str = "No authentication token received";
pub const MSG_OAUTH_UNSUPPORTED: &str = "Social authentication not implemented";
pub const MSG_RESET_UNSUPPORTED: &str = "Password reset not implemented";
pub const MSG_UPDATE_UNSUPPORTED: &str = "Update reset not implemented";

/// Number of random bytes in a locally minted sign-up token.
const SIGN_UP_TOKEN_BYTES: usize = 12;

pub struct CustomAuthClient {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
    allowed_role: String,
}

impl CustomAuthClient {
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            allowed_role: SUPERADMIN_ROLE.to_string(),
        }
    }

    /// Overrides the role a login response must carry.
    pub fn with_allowed_role(mut self, role: impl Into<String>) -> Self {
        self.allowed_role = role.into();
        self
    }

    fn access_denied(&self) -> DeskError {
        if self.allowed_role == SUPERADMIN_ROLE {
            DeskError::auth(MSG_ROLE_REQUIRED)
        } else {
            DeskError::auth(format!(
                "Access denied. {} role required.",
                self.allowed_role
            ))
        }
    }
}

/// Lowercase hex of `SIGN_UP_TOKEN_BYTES` random bytes.
fn generate_token() -> String {
    let mut bytes = [0u8; SIGN_UP_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[async_trait]
impl AuthClient for CustomAuthClient {
    async fn sign_up(&self, params: &SignUpParams) -> Result<()> {
        tracing::info!(email = %params.email, "Signing up with a local token");
        self.session.store_token(&generate_token())
    }

    async fn sign_in_with_oauth(&self, params: &SignInWithOAuthParams) -> Result<()> {
        tracing::warn!(provider = ?params.provider, "OAuth sign-in requested");
        Err(DeskError::not_implemented(MSG_OAUTH_UNSUPPORTED))
    }

    async fn sign_in_with_password(&self, params: &SignInWithPasswordParams) -> Result<()> {
        let response = self.api.login(params).await.map_err(|e| {
            tracing::error!(error = %e, email = %params.email, "Login failed");
            e
        })?;

        if response.role() != Some(self.allowed_role.as_str()) {
            tracing::warn!(
                email = %params.email,
                role = response.role().unwrap_or("<none>"),
                "Login rejected: insufficient role"
            );
            return Err(self.access_denied());
        }

        let Some(token) = response.token() else {
            tracing::warn!(email = %params.email, "Login response carried no token");
            return Err(DeskError::auth(MSG_NO_TOKEN));
        };

        self.session.store_token(token)?;
        tracing::info!(email = %params.email, "Signed in");
        Ok(())
    }

    async fn reset_password(&self, _params: &ResetPasswordParams) -> Result<()> {
        Err(DeskError::not_implemented(MSG_RESET_UNSUPPORTED))
    }

    async fn update_password(&self, _params: &ResetPasswordParams) -> Result<()> {
        Err(DeskError::not_implemented(MSG_UPDATE_UNSUPPORTED))
    }

    async fn get_user(&self) -> Result<Option<AdminUser>> {
        Ok(self.session.current_session()?.map(|session| session.user))
    }

    async fn sign_out(&self) {
        if let Err(e) = self.session.clear_token() {
            tracing::error!(error = %e, "Failed to clear session token");
        }
    }
}
