//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use actions::ProviderConfig;

/// Action server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Data provider endpoints and per-request retry settings.
    pub provider: ProviderConfig,
    /// Backoff base between fetch attempts.
    pub backoff_base: Duration,
    /// Deadline across all attempts of one fetch; `None` disables it.
    pub fetch_deadline: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ACTION_SERVER_ADDR` | Server bind address | `127.0.0.1:5055` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:subscriptions.db?mode=rwc` |
    /// | `HEALTH_API_URL` | Health information API base URL | `http://127.0.0.1:8000` |
    /// | `CENTERS_API_URL` | CoWIN calendar-by-district URL | public CoWIN endpoint |
    /// | `INDICATORS_API_URL` | WHO GHO indicator URL | public GHO endpoint |
    /// | `DEFAULT_DISTRICT_ID` | District for center lookups | `145` |
    /// | `FETCH_TIMEOUT_SECS` | Timeout per attempt | `5` |
    /// | `FETCH_MAX_RETRIES` | Retries after the first attempt | `2` |
    /// | `FETCH_BACKOFF_MS` | Backoff base (attempt n waits n × base) | `500` |
    /// | `FETCH_DEADLINE_SECS` | Deadline across attempts, `0` disables | `15` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ACTION_SERVER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5055".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:subscriptions.db?mode=rwc".to_string());

        let defaults = ProviderConfig::default();
        let provider = ProviderConfig {
            health_api_url: env::var("HEALTH_API_URL").unwrap_or(defaults.health_api_url),
            centers_url: env::var("CENTERS_API_URL").unwrap_or(defaults.centers_url),
            indicators_url: env::var("INDICATORS_API_URL").unwrap_or(defaults.indicators_url),
            default_district_id: env::var("DEFAULT_DISTRICT_ID")
                .unwrap_or(defaults.default_district_id),
            timeout: Duration::from_secs(parse_var("FETCH_TIMEOUT_SECS", 5)?),
            max_retries: parse_var("FETCH_MAX_RETRIES", 2)?,
        };

        let backoff_base = Duration::from_millis(parse_var("FETCH_BACKOFF_MS", 500)?);
        let fetch_deadline = match parse_var::<u64>("FETCH_DEADLINE_SECS", 15)? {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            addr,
            database_url,
            provider,
            backoff_base,
            fetch_deadline,
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ACTION_SERVER_ADDR format")]
    InvalidAddr,

    #[error("{0} must be a non-negative integer")]
    InvalidNumber(&'static str),
}
