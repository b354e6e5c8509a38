use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Every failure of a catalog operation surfaces as one of these variants;
/// nothing is swallowed. Transport errors are retried by the session before
/// they reach the caller, HTTP errors carry the enriched server message.
#[derive(Debug)]
pub enum PyxisError {
    /// Transport-level failure (connection, TLS, timeout) after retries exhausted
    Request(reqwest::Error),
    /// Non-2xx response from the catalog
    Http {
        /// Status code of the failed response
        status: StatusCode,
        /// Status line combined with the server-provided detail text
        message: String,
    },
    /// Response body could not be decoded
    Json(serde_json::Error),
    /// Credential file could not be read
    Io(std::io::Error),
    /// A caller-supplied value was rejected before any request was made
    InvalidInput(String),
}

impl fmt::Display for PyxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PyxisError::Request(e) => write!(f, "request error: {e}"),
            PyxisError::Http { message, .. } => write!(f, "http error: {message}"),
            PyxisError::Json(e) => write!(f, "deserialization error: {e}"),
            PyxisError::Io(e) => write!(f, "io error: {e}"),
            PyxisError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for PyxisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PyxisError::Request(e) => Some(e),
            PyxisError::Json(e) => Some(e),
            PyxisError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PyxisError {
    fn from(e: reqwest::Error) -> Self {
        PyxisError::Request(e)
    }
}

impl From<serde_json::Error> for PyxisError {
    fn from(e: serde_json::Error) -> Self {
        PyxisError::Json(e)
    }
}

impl From<std::io::Error> for PyxisError {
    fn from(e: std::io::Error) -> Self {
        PyxisError::Io(e)
    }
}
