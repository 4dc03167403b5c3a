//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: credentials, login payloads, the session and its stub identity
//! - `service`: the login endpoint port and the client capability set
//!
//! # Usage
//!
//! ```ignore
//! use stickerdesk_core::auth::{AuthClient, Session, SUPERADMIN_ROLE};
//! ```

mod model;
mod service;

pub use model::{
    AUTH_TOKEN_KEY, AdminUser, LoginResponse, LoginUser, OAuthProvider, ResetPasswordParams,
    SUPERADMIN_ROLE, Session, SignInWithOAuthParams, SignInWithPasswordParams, SignUpParams,
};
pub use service::{AuthApi, AuthClient};
