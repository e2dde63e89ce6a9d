//! CLI command implementations.

pub mod check;
pub mod codes;
pub mod get;
pub mod show;
pub mod template;
