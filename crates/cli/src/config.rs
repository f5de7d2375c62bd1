//! CLI configuration

use std::{path::PathBuf, time::Duration};

use clap::{Args, ValueEnum};
use shoplite::{
    config::{ClientConfig, DEFAULT_APP_ORIGIN, DEFAULT_BASE_URL},
    session::Console,
};

/// Backend connection settings.
#[derive(Debug, Args)]
pub(crate) struct ApiConfig {
    /// Backend API root
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Upper bound on a single request, in seconds
    #[arg(long, env = "API_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub api_timeout_seconds: u64,

    /// Storefront origin used for payment redirect URLs
    #[arg(long, env = "APP_ORIGIN", default_value = DEFAULT_APP_ORIGIN)]
    pub app_origin: String,

    /// Directory holding persisted sessions
    #[arg(long, env = "SESSION_DIR", default_value = ".shoplite")]
    pub session_dir: PathBuf,

    /// Act as the admin console
    #[arg(long, global = true)]
    pub admin: bool,
}

impl ApiConfig {
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.api_timeout_seconds))
            .with_app_origin(self.app_origin.clone())
    }

    pub(crate) const fn console(&self) -> Console {
        if self.admin {
            Console::Admin
        } else {
            Console::Storefront
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
