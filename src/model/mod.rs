//! Request and response models for the catalog API

/// Search conditions for the signature query endpoint
pub mod filter;
/// Registry selection and probe planning for repository lookup
pub mod registry;
/// Response payload types
pub mod responses;
