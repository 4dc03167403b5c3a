//! Authentication ports.

use async_trait::async_trait;

use super::model::{
    AdminUser, LoginResponse, ResetPasswordParams, SignInWithOAuthParams,
    SignInWithPasswordParams, SignUpParams,
};
use crate::error::Result;

/// Remote login endpoint.
///
/// Only transport-level outcomes are decided here: a non-2xx answer is an
/// error, a 2xx body is returned as is. Role and token checks belong to the
/// [`AuthClient`].
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &SignInWithPasswordParams) -> Result<LoginResponse>;
}

/// The authentication capability set a route guard expects.
///
/// Only password sign-in is backed by the server. The remaining methods are
/// placeholders: sign-up issues a local token and the others always fail.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn sign_up(&self, params: &SignUpParams) -> Result<()>;

    async fn sign_in_with_oauth(&self, params: &SignInWithOAuthParams) -> Result<()>;

    async fn sign_in_with_password(&self, params: &SignInWithPasswordParams) -> Result<()>;

    async fn reset_password(&self, params: &ResetPasswordParams) -> Result<()>;

    async fn update_password(&self, params: &ResetPasswordParams) -> Result<()>;

    /// Identity of the current session, `None` when signed out.
    async fn get_user(&self) -> Result<Option<AdminUser>>;

    /// Forgets the stored token. Never fails.
    async fn sign_out(&self);
}
