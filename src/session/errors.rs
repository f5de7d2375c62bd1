//! Session store errors.

use thiserror::Error;

use crate::session::StorageError;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session token is empty")]
    EmptyToken,

    #[error("failed to serialize session")]
    Serialize(#[source] serde_json::Error),

    #[error("session storage error")]
    Storage(#[from] StorageError),
}
