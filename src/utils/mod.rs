//! Supporting utilities

/// Opt-in logging setup built on the tracing stack
pub mod logger;
