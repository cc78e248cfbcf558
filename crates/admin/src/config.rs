//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_PASSCODE` - Passcode that unlocks the editor
//!
//! ## Optional
//! - `SHOP_DATA_DIR` - Directory holding the persisted shop document (default: data)
//! - `ADMIN_SESSION_DIR` - Directory holding the unlock flag
//!   (default: `$TMPDIR/swift-menu-admin-session`)
//!
//! The passcode is cosmetic gating only: whoever can read this configuration
//! or the data directory can edit the document directly.

use std::collections::HashMap;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_PASSCODE_LENGTH: usize = 8;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 2.5;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SESSION_DIR_NAME: &str = "swift-menu-admin-session";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "passcode",
    "xxx",
    "todo",
    "fixme",
    "1234",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Weak passcode in {0}: {1}")]
    WeakPasscode(String, String),
}

/// Admin editor configuration.
///
/// Implements `Debug` manually to redact the passcode.
#[derive(Clone)]
pub struct AdminConfig {
    /// Passcode compared against unlock attempts
    pub passcode: SecretString,
    /// Directory of the persisted shop document
    pub data_dir: PathBuf,
    /// Directory of the admin session flag
    pub session_dir: PathBuf,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("passcode", &"[REDACTED]")
            .field("data_dir", &self.data_dir)
            .field("session_dir", &self.session_dir)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. A weak
    /// passcode is logged as a warning, not rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `ADMIN_PASSCODE` is missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let passcode = get_required_env("ADMIN_PASSCODE")?;
        if passcode.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_PASSCODE".to_string(),
                "must not be blank".to_string(),
            ));
        }
        if let Err(e) = validate_passcode_strength(&passcode, "ADMIN_PASSCODE") {
            tracing::warn!("ADMIN_PASSCODE validation warning: {e}");
        }

        let data_dir = PathBuf::from(get_env_or_default("SHOP_DATA_DIR", DEFAULT_DATA_DIR));
        let session_dir = get_optional_env("ADMIN_SESSION_DIR")
            .map_or_else(default_session_dir, PathBuf::from);

        Ok(Self {
            passcode: SecretString::from(passcode),
            data_dir,
            session_dir,
        })
    }

    /// Build a configuration with explicit values (tests, embedding).
    #[must_use]
    pub fn new(
        passcode: impl Into<String>,
        data_dir: impl Into<PathBuf>,
        session_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            passcode: SecretString::from(passcode.into()),
            data_dir: data_dir.into(),
            session_dir: session_dir.into(),
        }
    }
}

/// Compare an unlock attempt against the expected passcode.
///
/// Surrounding whitespace in the attempt is ignored.
#[must_use]
pub fn passcode_matches(expected: &SecretString, attempt: &str) -> bool {
    attempt.trim() == expected.expose_secret()
}

/// Default session directory under the system temp dir.
#[must_use]
pub fn default_session_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_SESSION_DIR_NAME)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Check that a passcode is not a placeholder, is long enough, and is not trivially guessable.
fn validate_passcode_strength(passcode: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = passcode.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::WeakPasscode(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let length = passcode.chars().count();
    if length < MIN_PASSCODE_LENGTH {
        return Err(ConfigError::WeakPasscode(
            var_name.to_string(),
            format!("must be at least {MIN_PASSCODE_LENGTH} characters (got {length})"),
        ));
    }

    let entropy = shannon_entropy(passcode);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::WeakPasscode(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
