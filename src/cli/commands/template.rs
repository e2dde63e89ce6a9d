//! Implementation of the `yggdrasil template` command.
//!
//! Prints the effective configuration in the same shape `yggdrasil.yaml`
//! accepts, so it can be saved and edited.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::Config;

/// Result of `yggdrasil template`.
#[derive(Debug, Serialize)]
pub struct TemplateOutput {
    #[serde(skip)]
    yaml: String,
    #[serde(flatten)]
    config: Config,
}

impl TemplateOutput {
    /// Render `config` as YAML.
    pub fn new(config: &Config) -> Result<Self> {
        let yaml = serde_yaml::to_string(config).context("Failed to render configuration as YAML")?;
        Ok(Self {
            yaml,
            config: config.clone(),
        })
    }
}

impl CommandOutput for TemplateOutput {
    fn to_human(&self) -> String {
        self.yaml.trim_end().to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

/// Print the effective configuration.
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(&TemplateOutput::new(config)?, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_back() {
        let config = Config::default();
        let out = TemplateOutput::new(&config).unwrap();

        let yaml = out.to_human();
        assert!(yaml.contains("intent_lib: /opt/intent"));
        assert!(yaml.contains("logging:"));

        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_template_json() {
        let json = TemplateOutput::new(&Config::default()).unwrap().to_json();
        assert_eq!(json["debug"], serde_json::json!(true));
        assert_eq!(json["logging"]["level"], serde_json::json!("info"));
    }
}
