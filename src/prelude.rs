//! # Pyxis Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits of the library.
//!
//! ## Usage
//!
//! ```ignore
//! use pyxis_client::prelude::*;
//!
//! let config = PyxisConfig::new();
//! let client = PyxisClient::new(config).await?;
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the catalog client
pub use crate::config::PyxisConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::PyxisError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication strategy trait and the shipped variants
pub use crate::auth::{NoAuth, PyxisAuth, SslAuth, TokenAuth};

/// HTTP session layer
pub use crate::session::{PyxisSession, SessionBuilder};

// ============================================================================
// CLIENT AND MODELS
// ============================================================================

/// Catalog requests wrapper
pub use crate::client::PyxisClient;

/// Signature query conditions
pub use crate::model::filter::SignatureFilter;

/// Registry selection for repository lookup
pub use crate::model::registry::{RegistryLookup, RegistryProbe};

/// Response payload types
pub use crate::model::responses::{DataEnvelope, OperatorIndex, SignatureRecord};
