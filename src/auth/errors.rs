//! Auth service errors.

use thiserror::Error;

use crate::{
    gateway::GatewayError,
    session::{SessionStoreError, StorageError},
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication response did not include a token")]
    MissingToken,

    #[error("authentication response is missing `{0}`")]
    IncompleteResponse(&'static str),

    #[error("authentication request failed")]
    Gateway(#[from] GatewayError),

    #[error("failed to persist session")]
    Session(#[from] SessionStoreError),

    #[error("failed to clear session")]
    Storage(#[from] StorageError),
}
