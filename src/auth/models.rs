//! Auth Models

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::{
    auth::AuthError,
    session::{Role, Session, UserId},
    token::BearerToken,
};

/// Credentials posted to the login endpoint.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl Drop for LoginRequest {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Account details posted to the signup endpoint.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Requested role. The admin console always overrides this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Drop for SignupRequest {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Body returned by login, signup and token validation.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: Option<String>,

    #[serde(rename = "type")]
    pub token_type: Option<String>,

    pub id: Option<UserId>,

    #[serde(default, alias = "name")]
    pub username: String,

    #[serde(default)]
    pub email: String,

    pub role: Option<Role>,
}

impl TryFrom<AuthResponse> for Session {
    type Error = AuthError;

    fn try_from(response: AuthResponse) -> Result<Self, Self::Error> {
        let token = response
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or(AuthError::MissingToken)?;

        Ok(Self {
            id: response.id.ok_or(AuthError::IncompleteResponse("id"))?,
            username: response.username,
            email: response.email,
            role: response.role.ok_or(AuthError::IncompleteResponse("role"))?,
            token: BearerToken::new(token),
        })
    }
}
