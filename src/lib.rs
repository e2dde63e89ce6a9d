//! Yggdrasil - settings registry
//!
//! Holds the process-wide settings of the Yggdrasil application: the debug
//! flag, the locations of the INTENT, XIGT and SLEIPNIR libraries, the user
//! database location and the closed line tag and line attribute code sets.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the registry, line codes and their errors
//! - **Infrastructure Layer** (`infrastructure`): configuration loading and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use yggdrasil::{ConfigLoader, SettingKey};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     println!("{}", config.settings.get(SettingKey::UserDb));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, LineAttr, LineTag, LogFormat, LoggingConfig, RotationPolicy, SettingKey, SettingValue,
    Settings,
};
pub use domain::{LineCodeError, SettingKeyError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
