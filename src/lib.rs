//! # Pyxis Client
//!
//! Async client for the Pyxis container-metadata catalog API. It covers
//! operator index lookup, repository metadata retrieval (with automatic
//! internal-to-partner registry fallback) and container-signature
//! query/upload.
//!
//! The crate is organized in three layers:
//! - [`session`] — a configured HTTP transport bound to the catalog base
//!   URL, with retry/backoff and an optional TLS-verification toggle
//! - [`auth`] — pluggable authentication strategies applied while the
//!   session transport is built
//! - [`client`] — the public API: endpoint paths, query filters, status
//!   interpretation and payload extraction
//!
//! # Example
//! ```ignore
//! use pyxis_client::prelude::*;
//!
//! let config = PyxisConfig::with_hostname("https://pyxis.engineering.redhat.com/");
//! let auth = SslAuth::new("/etc/pub/client.crt", "/etc/pub/client.key");
//! let client = PyxisClient::with_auth(config, &auth).await?;
//!
//! let indices = client.get_operator_indices("4.5-4.6", Some("redhat")).await?;
//! for index in indices {
//!     println!("{}", index.path);
//! }
//! ```

/// Authentication strategies for the catalog transport
pub mod auth;
/// Public API for the catalog operations
pub mod client;
/// Construction parameters with environment-backed defaults
pub mod config;
/// Crate-wide default values and fixed hostnames
pub mod constants;
/// Error types for the library
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used types, re-exported
pub mod prelude;
/// HTTP session layer with retry/backoff
pub mod session;
/// Supporting utilities
pub mod utils;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the library
pub fn version() -> &'static str {
    VERSION
}
