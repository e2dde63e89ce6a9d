//! Layered loading and validation of [`Config`].

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::models::config::Config;
use crate::domain::models::line::{LineAttr, LineTag};
use crate::domain::models::settings::SettingKey;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "YGGDRASIL_";

/// Project configuration file, relative to the working directory
pub const PROJECT_CONFIG: &str = "yggdrasil.yaml";

/// Optional local overrides, relative to the working directory
pub const LOCAL_CONFIG: &str = "yggdrasil.local.yaml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn join_codes<T: ToString>(codes: &[T]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A path-valued key is empty
    #[error("{key} cannot be empty")]
    EmptyPath {
        /// The path-valued key that was empty
        key: SettingKey,
    },

    /// `line_tags` is not the canonical sequence
    #[error("Invalid line_tags: [{}]. Must be exactly [L, G, T, M]", join_codes(.0))]
    LineTags(Vec<LineTag>),

    /// `line_attrs` is not the canonical sequence
    #[error("Invalid line_attrs: [{}]. Must be exactly [AC, CN, DB, LN, SY]", join_codes(.0))]
    LineAttrs(Vec<LineAttr>),

    /// Unknown `logging.level`
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// An explicitly named file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the working directory and environment
    pub fn load() -> Result<Config> {
        Self::load_with(None)
    }

    /// Load configuration, optionally layering an explicit file on top of the
    /// project files
    pub fn load_with(explicit: Option<&Path>) -> Result<Config> {
        Self::extract(Self::figment(Path::new("."), explicit)?)
    }

    /// Build the layered provider chain rooted at `dir`
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `yggdrasil.yaml` (optional)
    /// 3. `yggdrasil.local.yaml` (optional)
    /// 4. The explicit file, which must exist
    /// 5. Environment variables (`YGGDRASIL_*`, `__` separates nested keys)
    pub fn figment(dir: &Path, explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join(PROJECT_CONFIG)))
            .merge(Yaml::file(dir.join(LOCAL_CONFIG)));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration from a specific file, ignoring project files and
    /// the environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));

        Self::extract(figment)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    /// Extract and validate
    pub fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;

        debug!(
            debug = config.settings.debug,
            user_db = %config.settings.user_db.display(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let settings = &config.settings;

        for (key, path) in settings.paths() {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyPath { key });
            }
        }

        if settings.line_tags != LineTag::ALL {
            return Err(ConfigError::LineTags(settings.line_tags.clone()));
        }

        if settings.line_attrs != LineAttr::ALL {
            return Err(ConfigError::LineAttrs(settings.line_attrs.clone()));
        }

        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
