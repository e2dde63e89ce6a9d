//! Implementation of the `yggdrasil show` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{list_table, output, CommandOutput};
use crate::domain::models::settings::{SettingValue, Settings};

/// One row of `yggdrasil show`.
#[derive(Debug, Serialize)]
pub struct SettingEntry {
    /// Registry key name
    pub key: &'static str,
    /// Current value
    pub value: SettingValue,
}

/// Result of `yggdrasil show`.
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Every key, in canonical order
    pub entries: Vec<SettingEntry>,
}

impl ShowOutput {
    /// Snapshot the registry.
    pub fn new(settings: &Settings) -> Self {
        let entries = settings
            .entries()
            .map(|(key, value)| SettingEntry {
                key: key.as_str(),
                value,
            })
            .collect();
        Self { entries }
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "value"]);
        for entry in &self.entries {
            table.add_row(vec![entry.key.to_string(), entry.value.to_string()]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.key.to_string(),
                    serde_json::to_value(&entry.value).unwrap_or_default(),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Print every setting.
pub fn execute(settings: &Settings, json_mode: bool) -> Result<()> {
    output(&ShowOutput::new(settings), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_key_in_order() {
        let out = ShowOutput::new(&Settings::default());
        let keys: Vec<&str> = out.entries.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                "DEBUG",
                "INTENT_LIB",
                "XIGT_LIB",
                "SLEIPNIR_LIB",
                "USER_DB",
                "LINE_TAGS",
                "LINE_ATTRS"
            ]
        );
    }

    #[test]
    fn test_human_output() {
        let human = ShowOutput::new(&Settings::default()).to_human();
        assert!(human.contains("SLEIPNIR_LIB"));
        assert!(human.contains("/var/www/yggdrasil-users/users.js"));
        assert!(human.contains("AC, CN, DB, LN, SY"));
    }

    #[test]
    fn test_json_output() {
        let json = ShowOutput::new(&Settings::default()).to_json();
        assert_eq!(json["DEBUG"], serde_json::json!(true));
        assert_eq!(json["XIGT_LIB"], serde_json::json!("/opt/xigt"));
        assert_eq!(json["LINE_TAGS"], serde_json::json!(["L", "G", "T", "M"]));
    }
}
