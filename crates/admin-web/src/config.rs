//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use sms_gateway::GatewayConfig;

/// Admin web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Directory with the dashboard's static files.
    pub dashboard_dir: PathBuf,
    /// SMS credentials; `None` runs broadcasts in dry-run mode.
    pub sms: Option<GatewayConfig>,
    /// Maximum sends in flight during a broadcast.
    pub broadcast_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ADMIN_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:subscriptions.db?mode=rwc` |
    /// | `DASHBOARD_DIR` | Static dashboard files | `frontend` |
    /// | `SMS_ACCOUNT_SID` | SMS account SID | (dry run if unset) |
    /// | `SMS_AUTH_TOKEN` | SMS auth token | (dry run if unset) |
    /// | `SMS_FROM_NUMBER` | Sender number | (dry run if unset) |
    /// | `SMS_API_URL` | SMS API base URL | `https://api.twilio.com` |
    /// | `BROADCAST_CONCURRENCY` | Concurrent sends per broadcast | `8` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ADMIN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:subscriptions.db?mode=rwc".to_string());

        let dashboard_dir = env::var("DASHBOARD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("frontend"));

        let broadcast_concurrency = match env::var("BROADCAST_CONCURRENCY") {
            Ok(value) => value
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or(ConfigError::InvalidConcurrency)?,
            Err(_) => 8,
        };

        Ok(Self {
            addr,
            database_url,
            dashboard_dir,
            sms: sms_from_env()?,
            broadcast_concurrency,
        })
    }
}

/// Read SMS credentials. All three must be set, or none.
fn sms_from_env() -> Result<Option<GatewayConfig>, ConfigError> {
    let non_empty = |name: &str| env::var(name).ok().filter(|v: &String| !v.trim().is_empty());

    match (
        non_empty("SMS_ACCOUNT_SID"),
        non_empty("SMS_AUTH_TOKEN"),
        non_empty("SMS_FROM_NUMBER"),
    ) {
        (Some(sid), Some(token), Some(from)) => {
            let mut config = GatewayConfig::new(sid, token, from);
            if let Some(url) = non_empty("SMS_API_URL") {
                config = config.with_base_url(url);
            }
            Ok(Some(config))
        }
        (None, None, None) => Ok(None),
        _ => Err(ConfigError::IncompleteSms),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ADMIN_ADDR format")]
    InvalidAddr,

    #[error("BROADCAST_CONCURRENCY must be a positive integer")]
    InvalidConcurrency,

    #[error("SMS_ACCOUNT_SID, SMS_AUTH_TOKEN and SMS_FROM_NUMBER must be set together")]
    IncompleteSms,
}
