//! Export configuration.
//!
//! Configuration is explicit: the caller loads it and hands it to the entry
//! point. Nothing here is ambient or process-global. The file layout keeps
//! the shape of the legacy `config.json` (auth and project tables) and adds
//! an optional `export` table with sensible defaults.

use serde::{Deserialize, Serialize};

use export_fs::{ConfigStore, NormalizedPath};

use crate::client::{ProjectRef, RevisionRef};
use crate::error::Result;

/// Platform credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub username: String,
    #[serde(alias = "apikey")]
    pub api_key: String,
}

/// Project coordinates on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub branch: String,
}

/// Export-run options; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Revision to export; -1 means latest on the configured branch.
    pub revision: i64,
    /// Root under which the per-project output folder is created.
    pub output_dir: String,
    /// Token substituted for filesystem-illegal characters in file names.
    pub replacement: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            revision: crate::client::LATEST_REVISION,
            output_dir: "./out".into(),
            replacement: "_".into(),
        }
    }
}

/// Top-level configuration for an export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub auth: Auth,
    pub project: Project,
    #[serde(default)]
    pub export: ExportOptions,
}

impl ExportConfig {
    /// Load from a TOML/JSON/YAML file, detected by extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    pub fn project_ref(&self) -> ProjectRef {
        ProjectRef {
            id: self.project.id.clone(),
            name: self.project.name.clone(),
        }
    }

    pub fn revision_ref(&self) -> RevisionRef {
        RevisionRef {
            number: self.export.revision,
            branch: self.project.branch.clone(),
        }
    }
}
