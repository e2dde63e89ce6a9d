//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::settings::SettingKey;

#[derive(Parser, Debug)]
#[command(name = "yggdrasil")]
#[command(about = "Yggdrasil - settings registry", long_about = None)]
#[command(version)]
#[allow(missing_docs)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file layered over yggdrasil.yaml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every setting
    Show,

    /// Print a single setting
    Get {
        /// Setting name, e.g. USER_DB or user_db
        key: SettingKey,
    },

    /// Validate the configuration and report which paths exist
    Check,

    /// List line tags and line attributes
    Codes,

    /// Print the effective configuration as YAML
    Template,
}
