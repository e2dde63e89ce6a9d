//! Domain layer for the Yggdrasil settings registry
//!
//! This module contains the registry, the line code sets and their errors.

pub mod errors;
pub mod models;

pub use errors::{LineCodeError, SettingKeyError};
