//! Bearer token handling and claims-based expiry checks.

use std::fmt;

use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;
use zeroize::Zeroize;

/// URL-safe base64 engine that accepts claims segments with or without padding.
const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Opaque bearer credential issued by the backend on login or signup.
///
/// The raw value is redacted from `Debug` output and wiped on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token text, as sent in the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Whether the token can be sent verbatim in an `Authorization` header.
    #[must_use]
    pub fn is_transmittable(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|byte| byte.is_ascii_graphic())
    }

    /// See [`is_expired`].
    #[must_use]
    pub fn is_expired(&self) -> bool {
        is_expired(&self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(**redacted**)")?;

        Ok(())
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Claims carried in the middle segment of a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, sent as seconds since the Unix epoch (integral or fractional).
    #[serde(deserialize_with = "epoch_seconds")]
    pub exp: Timestamp,

    /// Issued-at, in seconds since the Unix epoch.
    #[serde(default)]
    pub iat: Option<i64>,

    /// Subject (the account email for this backend).
    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default, rename = "userId")]
    pub user_id: Option<i64>,
}

impl TokenClaims {
    /// Whether these claims are expired relative to `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.exp <= now
    }
}

fn epoch_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    let seconds = serde_json::Number::deserialize(deserializer)?;

    if let Some(whole) = seconds.as_i64() {
        return Timestamp::from_second(whole).map_err(de::Error::custom);
    }

    let fractional = seconds
        .as_f64()
        .ok_or_else(|| de::Error::custom("expiry is not a finite number"))?;
    let offset = SignedDuration::try_from_secs_f64(fractional).map_err(de::Error::custom)?;

    Timestamp::from_duration(offset).map_err(de::Error::custom)
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no claims segment")]
    MissingClaims,

    #[error("token claims segment is not valid base64url")]
    InvalidEncoding(#[source] base64::DecodeError),

    #[error("token claims are not valid UTF-8")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),

    #[error("token claims could not be parsed")]
    InvalidClaims(#[source] serde_json::Error),
}

/// Decode the claims segment of `token` without verifying its signature.
///
/// # Errors
///
/// Returns an error if the token has fewer than two segments, or the claims
/// segment is not base64url-encoded JSON carrying an `exp` field.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');

    let _header = segments.next();

    let claims = segments
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingClaims)?;

    let bytes = CLAIMS_ENGINE
        .decode(claims)
        .map_err(TokenError::InvalidEncoding)?;

    let text = String::from_utf8(bytes).map_err(TokenError::InvalidUtf8)?;

    serde_json::from_str(&text).map_err(TokenError::InvalidClaims)
}

/// Whether `token` must be treated as expired at `now`.
///
/// Fails closed: any token whose claims cannot be decoded is expired.
#[must_use]
pub fn is_expired_at(token: &str, now: Timestamp) -> bool {
    decode_claims(token).map_or(true, |claims| claims.is_expired_at(now))
}

/// Whether `token` must be treated as expired right now.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Timestamp::now())
}
