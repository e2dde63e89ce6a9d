//! Implementation of the `yggdrasil codes` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::line::{LineAttr, LineTag};
use crate::domain::models::settings::Settings;

/// Result of `yggdrasil codes`.
#[derive(Debug, Serialize)]
pub struct CodesOutput {
    /// Line tags, in canonical order
    pub line_tags: Vec<LineTag>,
    /// Line attributes, in canonical order
    pub line_attrs: Vec<LineAttr>,
}

impl CommandOutput for CodesOutput {
    fn to_human(&self) -> String {
        let tags: Vec<&str> = self.line_tags.iter().map(LineTag::as_str).collect();
        let attrs: Vec<&str> = self.line_attrs.iter().map(LineAttr::as_str).collect();
        format!(
            "Line tags:       {}\nLine attributes: {}",
            tags.join(" "),
            attrs.join(" ")
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print both line code sets.
pub fn execute(settings: &Settings, json_mode: bool) -> Result<()> {
    let out = CodesOutput {
        line_tags: settings.line_tags.clone(),
        line_attrs: settings.line_attrs.clone(),
    };
    output(&out, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_output() {
        let out = CodesOutput {
            line_tags: LineTag::ALL.to_vec(),
            line_attrs: LineAttr::ALL.to_vec(),
        };

        assert_eq!(
            out.to_human(),
            "Line tags:       L G T M\nLine attributes: AC CN DB LN SY"
        );
        assert_eq!(
            out.to_json(),
            serde_json::json!({
                "line_tags": ["L", "G", "T", "M"],
                "line_attrs": ["AC", "CN", "DB", "LN", "SY"],
            })
        );
    }
}
