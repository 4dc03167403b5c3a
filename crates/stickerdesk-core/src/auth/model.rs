//! Authentication domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key the session token is persisted under.
pub const AUTH_TOKEN_KEY: &str = "custom-auth-token";

/// The only role allowed into the admin client by default.
pub const SUPERADMIN_ROLE: &str = "SUPERADMIN";

/// Identity reported for any stored token.
///
/// The token is never resolved against the backend: whoever holds a token is
/// reported as this fixed administrator. It is a placeholder, not a security
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub avatar: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Default for AdminUser {
    fn default() -> Self {
        Self {
            id: "USR-000".to_string(),
            avatar: "/assets/logo.png".to_string(),
            first_name: "KBTC".to_string(),
            last_name: "Admin".to_string(),
            email: "kbtcsuperchat@admin.com".to_string(),
        }
    }
}

impl AdminUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A signed-in session: the stored token plus the identity it stands for.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AdminUser,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: AdminUser::default(),
        }
    }
}

// Keeps tokens out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SignInWithPasswordParams {
    pub email: String,
    pub password: String,
}

impl SignInWithPasswordParams {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for SignInWithPasswordParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInWithPasswordParams")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    Google,
    Discord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInWithOAuthParams {
    pub provider: OAuthProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordParams {
    pub email: String,
}

/// Body of a successful `POST /auth/admin/login`.
///
/// Both fields are optional on the wire; their absence is an auth failure,
/// not a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

impl LoginResponse {
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.role.as_deref())
    }

    /// Token, treating an empty string as missing.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// The `user` object of a login response. Only `role` is interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
