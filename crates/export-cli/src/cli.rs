//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Model Export - Export a low-code application model to files on disk
#[derive(Parser, Debug)]
#[command(name = "model-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Export every model element to one file per element
    ///
    /// Reads project coordinates from the config file, obtains a working
    /// copy from the model snapshot, and writes serialized elements under
    /// <output dir>/<project name>/. If that folder already exists the run
    /// is skipped to protect a prior export.
    ///
    /// Examples:
    ///   model-export export --snapshot model.json
    ///   model-export export -s model.json -c config.json --out ./exports
    Export {
        /// Path to the export configuration (TOML, JSON, or YAML)
        #[arg(short, long, default_value = "config.toml")]
        config: String,

        /// Path to the model snapshot file
        #[arg(short, long)]
        snapshot: String,

        /// Output root, overriding the configured one
        #[arg(short, long)]
        out: Option<String>,

        /// Output the run summary as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Manage export configuration
    Config {
        /// Config action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List element kinds in export order
    Kinds,
}

/// Configuration management actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Display the resolved configuration (API key redacted)
    Show {
        /// Path to the export configuration
        #[arg(short, long, default_value = "config.toml")]
        config: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
