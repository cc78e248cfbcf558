//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SHOP_DATA_DIR` - Directory holding the persisted shop document (default: data)
//! - `STOREFRONT_ASSETS_DIR` - Menu images, served under `/assets`
//!   (default: crates/storefront/assets)
//! - `STOREFRONT_STATIC_DIR` - Stylesheets, served under `/static`
//!   (default: crates/storefront/static)
//! - `SHOP_DATA_REFRESH_ON_REQUEST` - Reload the persisted document before
//!   every request, true or false (default: true)
//! - `SHOP_DATA_REFRESH_SECS` - Also reload the persisted document every N seconds
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_ASSETS_DIR: &str = "crates/storefront/assets";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory of the persisted shop document
    pub data_dir: PathBuf,
    /// Directory of menu images (`{slug}.jpg`)
    pub assets_dir: PathBuf,
    /// Directory of stylesheets
    pub static_dir: PathBuf,
    /// Reload the persisted document before every request
    pub refresh_on_request: bool,
    /// How often to reload the persisted document in the background, if at all
    pub refresh_interval: Option<Duration>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry transaction sample rate
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            refresh_on_request: true,
            refresh_interval: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        let host = parse_optional_env::<IpAddr>("STOREFRONT_HOST")?.unwrap_or(defaults.host);
        let port = parse_optional_env::<u16>("STOREFRONT_PORT")?.unwrap_or(defaults.port);

        let refresh_on_request = parse_optional_env::<bool>("SHOP_DATA_REFRESH_ON_REQUEST")?
            .unwrap_or(defaults.refresh_on_request);
        let refresh_interval = match parse_optional_env::<u64>("SHOP_DATA_REFRESH_SECS")? {
            Some(0) => {
                return Err(ConfigError::InvalidEnvVar(
                    "SHOP_DATA_REFRESH_SECS".to_string(),
                    "must be greater than zero".to_string(),
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let sentry_sample_rate =
            parse_rate("SENTRY_SAMPLE_RATE")?.unwrap_or(defaults.sentry_sample_rate);
        let sentry_traces_sample_rate =
            parse_rate("SENTRY_TRACES_SAMPLE_RATE")?.unwrap_or(defaults.sentry_traces_sample_rate);

        Ok(Self {
            host,
            port,
            data_dir: get_optional_env("SHOP_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            assets_dir: get_optional_env("STOREFRONT_ASSETS_DIR")
                .map_or(defaults.assets_dir, PathBuf::from),
            static_dir: get_optional_env("STOREFRONT_STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            refresh_on_request,
            refresh_interval,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Blank values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable.
fn parse_optional_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

/// Parse a sample rate in `0.0..=1.0`.
fn parse_rate(key: &str) -> Result<Option<f32>, ConfigError> {
    match parse_optional_env::<f32>(key)? {
        Some(rate) if !(0.0..=1.0).contains(&rate) => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        )),
        rate => Ok(rate),
    }
}
