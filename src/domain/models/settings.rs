//! The settings registry.
//!
//! [`Settings`] holds the seven values every Yggdrasil component reads: the
//! debug flag, the INTENT/XIGT/SLEIPNIR library locations, the user database
//! location and the two line code sets. It is built once at startup (see
//! [`ConfigLoader`](crate::infrastructure::config::ConfigLoader)) and handed
//! out by reference; nothing mutates it afterwards.
//!
//! Paths are opaque. The registry never checks that they exist or how they
//! will be used.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::line::{LineAttr, LineTag};
use crate::domain::errors::SettingKeyError;

/// Registry of process-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Toggles verbose/diagnostic behavior in consumers
    #[serde(default = "default_debug")]
    pub debug: bool,

    /// Location of the INTENT library
    #[serde(default = "default_intent_lib")]
    pub intent_lib: PathBuf,

    /// Location of the XIGT library
    #[serde(default = "default_xigt_lib")]
    pub xigt_lib: PathBuf,

    /// Location of the SLEIPNIR library
    #[serde(default = "default_sleipnir_lib")]
    pub sleipnir_lib: PathBuf,

    /// Location of the user record store
    #[serde(default = "default_user_db")]
    pub user_db: PathBuf,

    /// Record-type tags, in canonical order
    #[serde(default = "default_line_tags")]
    pub line_tags: Vec<LineTag>,

    /// Record attribute codes, in canonical order
    #[serde(default = "default_line_attrs")]
    pub line_attrs: Vec<LineAttr>,
}

const fn default_debug() -> bool {
    true
}

fn default_intent_lib() -> PathBuf {
    PathBuf::from("/opt/intent")
}

fn default_xigt_lib() -> PathBuf {
    PathBuf::from("/opt/xigt")
}

fn default_sleipnir_lib() -> PathBuf {
    PathBuf::from("/opt/sleipnir")
}

fn default_user_db() -> PathBuf {
    PathBuf::from("/var/www/yggdrasil-users/users.js")
}

fn default_line_tags() -> Vec<LineTag> {
    LineTag::ALL.to_vec()
}

fn default_line_attrs() -> Vec<LineAttr> {
    LineAttr::ALL.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: default_debug(),
            intent_lib: default_intent_lib(),
            xigt_lib: default_xigt_lib(),
            sleipnir_lib: default_sleipnir_lib(),
            user_db: default_user_db(),
            line_tags: default_line_tags(),
            line_attrs: default_line_attrs(),
        }
    }
}

impl Settings {
    /// Read a single value by key.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::Debug => SettingValue::Flag(self.debug),
            SettingKey::IntentLib => SettingValue::Path(self.intent_lib.clone()),
            SettingKey::XigtLib => SettingValue::Path(self.xigt_lib.clone()),
            SettingKey::SleipnirLib => SettingValue::Path(self.sleipnir_lib.clone()),
            SettingKey::UserDb => SettingValue::Path(self.user_db.clone()),
            SettingKey::LineTags => SettingValue::LineTags(self.line_tags.clone()),
            SettingKey::LineAttrs => SettingValue::LineAttrs(self.line_attrs.clone()),
        }
    }

    /// All keys with their values, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (SettingKey, SettingValue)> + '_ {
        SettingKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// The path-valued keys.
    pub fn paths(&self) -> [(SettingKey, &Path); 4] {
        [
            (SettingKey::IntentLib, self.intent_lib.as_path()),
            (SettingKey::XigtLib, self.xigt_lib.as_path()),
            (SettingKey::SleipnirLib, self.sleipnir_lib.as_path()),
            (SettingKey::UserDb, self.user_db.as_path()),
        ]
    }

    /// Serialize into a JSON object keyed by field name.
    ///
    /// # Errors
    /// Fails only if a path is not valid UTF-8.
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = Map::new();
        for (key, value) in self.entries() {
            map.insert(key.field().to_string(), serde_json::to_value(value)?);
        }
        Ok(map)
    }

    /// Rebuild a registry from a map produced by [`Settings::to_map`].
    ///
    /// Missing keys take their default value.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(map))
    }
}

/// Names of the registry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    /// `DEBUG`
    Debug,
    /// `INTENT_LIB`
    IntentLib,
    /// `XIGT_LIB`
    XigtLib,
    /// `SLEIPNIR_LIB`
    SleipnirLib,
    /// `USER_DB`
    UserDb,
    /// `LINE_TAGS`
    LineTags,
    /// `LINE_ATTRS`
    LineAttrs,
}

impl SettingKey {
    /// Every key, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Debug,
        Self::IntentLib,
        Self::XigtLib,
        Self::SleipnirLib,
        Self::UserDb,
        Self::LineTags,
        Self::LineAttrs,
    ];

    /// Canonical upper-case key name, e.g. `USER_DB`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::IntentLib => "INTENT_LIB",
            Self::XigtLib => "XIGT_LIB",
            Self::SleipnirLib => "SLEIPNIR_LIB",
            Self::UserDb => "USER_DB",
            Self::LineTags => "LINE_TAGS",
            Self::LineAttrs => "LINE_ATTRS",
        }
    }

    /// Field name used in configuration files, e.g. `user_db`.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::IntentLib => "intent_lib",
            Self::XigtLib => "xigt_lib",
            Self::SleipnirLib => "sleipnir_lib",
            Self::UserDb => "user_db",
            Self::LineTags => "line_tags",
            Self::LineAttrs => "line_attrs",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingKeyError;

    /// Accepts either spelling, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == upper)
            .ok_or_else(|| SettingKeyError(s.to_string()))
    }
}

/// A value read from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// `DEBUG`
    Flag(bool),
    /// Any path-valued key
    Path(PathBuf),
    /// `LINE_TAGS`
    LineTags(Vec<LineTag>),
    /// `LINE_ATTRS`
    LineAttrs(Vec<LineAttr>),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::LineTags(tags) => write_codes(f, tags),
            Self::LineAttrs(attrs) => write_codes(f, attrs),
        }
    }
}

fn write_codes<T: fmt::Display>(f: &mut fmt::Formatter<'_>, codes: &[T]) -> fmt::Result {
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{code}")?;
    }
    Ok(())
}
