//! Domain service errors.

use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed")]
    Gateway(#[from] GatewayError),

    /// The backend answered successfully but flagged the operation as failed.
    #[error("operation rejected by backend")]
    Rejected { message: Option<String> },

    #[error("response is missing `{0}`")]
    MissingData(&'static str),
}

impl ServiceError {
    /// Human-readable reason, preferring the backend's own message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Gateway(error) => error.message(),
            Self::Rejected { message } => message.as_deref(),
            Self::MissingData(_) => None,
        }
    }

    /// Whether the session was ended because the backend refused it.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Gateway(GatewayError::Unauthorized))
    }
}
