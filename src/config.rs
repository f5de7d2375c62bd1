//! Client configuration.

use std::time::Duration;

/// Backend API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Upper bound on a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Origin of the storefront, used to build payment redirect URLs.
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";

/// Settings shared by every service of one application instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub app_origin: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_app_origin(mut self, app_origin: impl Into<String>) -> Self {
        self.app_origin = app_origin.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            app_origin: DEFAULT_APP_ORIGIN.to_string(),
        }
    }
}
