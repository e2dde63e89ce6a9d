//! Domain models: the registry, its configuration wrapper and line codes.

pub mod config;
pub mod line;
pub mod settings;

pub use config::{Config, LogFormat, LoggingConfig, RotationPolicy};
pub use line::{LineAttr, LineTag};
pub use settings::{SettingKey, SettingValue, Settings};
