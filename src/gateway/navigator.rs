//! Navigation hook used when a session is forcibly ended.

use mockall::automock;

/// Route of the login view in both consoles.
pub const LOGIN_PATH: &str = "/login";

/// Receives navigation requests from the gateway.
#[automock]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
