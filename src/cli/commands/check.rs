//! Implementation of the `yggdrasil check` command.
//!
//! Reaching this command means the configuration already loaded and
//! validated. Path existence is reported for the operator only; a missing
//! path is not an error.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::output::{list_table, output, CommandOutput};
use crate::domain::models::settings::Settings;

/// Existence of one configured path.
#[derive(Debug, Serialize)]
pub struct PathStatus {
    /// Registry key name
    pub key: &'static str,
    /// Configured path
    pub path: PathBuf,
    /// Whether the path exists on this host
    pub exists: bool,
}

/// Result of `yggdrasil check`.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// One entry per path-valued key, in canonical order
    pub paths: Vec<PathStatus>,
}

impl CheckOutput {
    /// Stat every path-valued key.
    pub fn new(settings: &Settings) -> Self {
        let paths = settings
            .paths()
            .into_iter()
            .map(|(key, path)| PathStatus {
                key: key.as_str(),
                path: path.to_path_buf(),
                exists: path.exists(),
            })
            .collect();
        Self { paths }
    }

    /// Number of paths that do not exist.
    pub fn missing(&self) -> usize {
        self.paths.iter().filter(|p| !p.exists).count()
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "path", "status"]);
        for status in &self.paths {
            let label = if status.exists {
                style("found").green().to_string()
            } else {
                style("missing").yellow().to_string()
            };
            table.add_row(vec![
                status.key.to_string(),
                status.path.display().to_string(),
                label,
            ]);
        }

        let mut lines = vec!["Configuration is valid.".to_string(), table.to_string()];
        let missing = self.missing();
        if missing > 0 {
            lines.push(format!("\n{missing} path(s) not found on this host."));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Report path existence; missing paths are logged at `warn` but never fail.
pub fn execute(settings: &Settings, json_mode: bool) -> Result<()> {
    let out = CheckOutput::new(settings);
    for status in out.paths.iter().filter(|p| !p.exists) {
        warn!(key = status.key, path = %status.path.display(), "configured path does not exist");
    }
    output(&out, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reports_existing_and_missing_paths() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            intent_lib: dir.path().to_path_buf(),
            xigt_lib: dir.path().join("no-such-dir"),
            ..Default::default()
        };

        let out = CheckOutput::new(&settings);
        assert_eq!(out.paths.len(), 4);
        assert!(out.paths[0].exists);
        assert!(!out.paths[1].exists);
        assert!(out.missing() >= 1);
    }

    #[test]
    fn test_json_output() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            user_db: dir.path().join("users.js"),
            ..Default::default()
        };

        let json = CheckOutput::new(&settings).to_json();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["paths"].as_array().unwrap().len(), 4);
        assert_eq!(json["paths"][3]["key"], serde_json::json!("USER_DB"));
        assert_eq!(json["paths"][3]["exists"], serde_json::json!(false));
    }

    #[test]
    fn test_human_output_counts_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let settings = Settings {
            intent_lib: missing.clone(),
            xigt_lib: missing.clone(),
            sleipnir_lib: missing.clone(),
            user_db: missing,
            ..Default::default()
        };

        let human = CheckOutput::new(&settings).to_human();
        assert!(human.starts_with("Configuration is valid."));
        assert!(human.contains("4 path(s) not found"));
    }
}
