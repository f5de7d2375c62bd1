//! Terminal navigation

use shoplite::gateway::{LOGIN_PATH, Navigator};
use tracing::warn;

/// Stands in for the login view: tells the user to sign in again.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        warn!(path, "session ended by backend");

        if path == LOGIN_PATH {
            eprintln!("your session has expired; run `shoplite login` to sign in again");
        }
    }
}
