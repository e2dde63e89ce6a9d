//! Implementation of the `yggdrasil get` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::settings::{SettingKey, SettingValue, Settings};

/// Result of `yggdrasil get`.
#[derive(Debug, Serialize)]
pub struct GetOutput {
    /// Registry key name
    pub key: &'static str,
    /// Current value
    pub value: SettingValue,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        self.value.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            self.key.to_string(),
            serde_json::to_value(&self.value).unwrap_or_default(),
        );
        serde_json::Value::Object(map)
    }
}

/// Print the value of `key`.
pub fn execute(settings: &Settings, key: SettingKey, json_mode: bool) -> Result<()> {
    let out = GetOutput {
        key: key.as_str(),
        value: settings.get(key),
    };
    output(&out, json_mode);
    Ok(())
}
