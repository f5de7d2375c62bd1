//! Gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::gateway::TransportError;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend rejected the credentials of an authenticated call. The
    /// session has already been evicted when this is returned.
    #[error("authentication required")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// The request never produced a response (timeout, refused connection).
    #[error("network error")]
    Network(#[from] TransportError),

    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    #[error("session token cannot be sent as a header")]
    InvalidCredential(#[source] reqwest::header::InvalidHeaderValue),
}

impl GatewayError {
    /// Status code of a rejected request, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_)
            | Self::Encode(_)
            | Self::Decode(_)
            | Self::InvalidCredential(_) => None,
        }
    }

    /// Backend-supplied error message, when the body carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
