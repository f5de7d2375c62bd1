//! Session store.

use std::{fmt, sync::Arc};

use tracing::{debug, info, warn};

use crate::session::{
    Console, Session, SessionState, SessionStorage, SessionStoreError, StorageError,
};

/// Single source of truth for who is logged in to one console.
///
/// Every read re-validates the stored token, so an expired or corrupt
/// session is evicted the first time anything looks at it.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    console: Console,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>, console: Console) -> Self {
        Self { storage, console }
    }

    #[must_use]
    pub const fn console(&self) -> Console {
        self.console
    }

    /// Persist `session`, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has an empty token, cannot be
    /// serialized, or the storage write fails.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if session.token.is_empty() {
            return Err(SessionStoreError::EmptyToken);
        }

        let value = serde_json::to_string(session).map_err(SessionStoreError::Serialize)?;

        self.storage.set(self.key(), &value)?;

        debug!(console = ?self.console, user = %session.id, "session saved");

        Ok(())
    }

    /// The stored session, if one exists and its token is still valid.
    ///
    /// Malformed or expired sessions are cleared from storage and reported as
    /// absent.
    pub fn current(&self) -> Option<Session> {
        let raw = match self.storage.get(self.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(source) => {
                warn!(console = ?self.console, "failed to read session: {source}");

                return None;
            }
        };

        let session = match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.token.is_transmittable() => session,
            Ok(_) => {
                warn!(console = ?self.console, "discarding session without a usable token");
                self.evict();

                return None;
            }
            Err(source) => {
                warn!(console = ?self.console, "discarding malformed session: {source}");
                self.evict();

                return None;
            }
        };

        if session.token.is_expired() {
            info!(console = ?self.console, user = %session.id, "session token expired");
            self.evict();

            return None;
        }

        Some(session)
    }

    /// Remove the stored session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to remove the entry.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(self.key())?;

        debug!(console = ?self.console, "session cleared");

        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current()
            .is_some_and(|session| !session.token.is_empty())
    }

    pub fn is_privileged(&self) -> bool {
        self.current().is_some_and(|session| session.is_privileged())
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    const fn key(&self) -> &'static str {
        self.console.storage_key()
    }

    fn evict(&self) {
        if let Err(source) = self.clear() {
            warn!(console = ?self.console, "failed to evict session: {source}");
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("console", &self.console)
            .finish_non_exhaustive()
    }
}
