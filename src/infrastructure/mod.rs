//! Infrastructure layer module
//!
//! - Configuration loading (figment)
//! - Logging infrastructure (tracing)

pub mod config;
pub mod logging;
