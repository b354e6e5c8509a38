use crate::constants::{DEFAULT_BACKOFF_FACTOR, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS};
use dotenv::dotenv;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to fall back to
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Construction parameters for a catalog client
///
/// Holds everything the session transport is configured from. The struct is
/// plain data; it can be built field-by-field or loaded from the environment
/// with [`PyxisConfig::new`].
#[derive(Debug, Clone)]
pub struct PyxisConfig {
    /// Catalog service hostname, e.g. `https://pyxis.engineering.redhat.com/`
    pub hostname: String,
    /// Number of retry attempts for catalog requests
    pub retries: u32,
    /// Backoff factor in seconds applied between attempts after the first try
    pub backoff_factor: f64,
    /// Enable/disable TLS certificate verification
    pub verify: bool,
    /// Timeout in seconds applied to each request attempt
    pub timeout_secs: u64,
}

impl Default for PyxisConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PyxisConfig {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present, then reads `PYXIS_SERVER`, `PYXIS_RETRIES`,
    /// `PYXIS_BACKOFF_FACTOR`, `PYXIS_SSL_VERIFY` and `PYXIS_TIMEOUT_SECS`,
    /// falling back to the crate defaults for anything unset.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let hostname = get_env_or_default(
            "PYXIS_SERVER",
            String::from("https://pyxis.engineering.redhat.com/"),
        );
        if env::var("PYXIS_SERVER").is_err() {
            error!("PYXIS_SERVER not found in environment variables or .env file");
        }

        PyxisConfig {
            hostname,
            retries: get_env_or_default("PYXIS_RETRIES", DEFAULT_RETRIES),
            backoff_factor: get_env_or_default("PYXIS_BACKOFF_FACTOR", DEFAULT_BACKOFF_FACTOR),
            verify: get_env_or_default("PYXIS_SSL_VERIFY", true),
            timeout_secs: get_env_or_default("PYXIS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a configuration for the given hostname with default policy values
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        PyxisConfig {
            hostname: hostname.into(),
            retries: DEFAULT_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            verify: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
