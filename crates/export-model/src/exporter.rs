//! The export engine.
//!
//! Walks a working copy kind by kind, loads each element, resolves a unique
//! file path for it, and writes its serialized form to disk. Loads are
//! awaited one at a time; there is never more than one in flight.

use std::fs;

use serde::Serialize;
use tracing::{debug, info, warn};

use export_fs::{NormalizedPath, io, unique_path};

use crate::client::WorkingCopy;
use crate::element::ElementKind;
use crate::error::{Error, Result};

/// Export engine for a single run.
pub struct Exporter {
    output_root: NormalizedPath,
    replacement: String,
}

/// What a run did, per kind; serializable for `--json` consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub project: String,
    pub output_dir: String,
    /// True when the run stopped early because the output folder pre-existed.
    pub skipped: bool,
    pub counts: Vec<KindCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: ElementKind,
    pub count: usize,
}

impl ExportSummary {
    fn skipped(project: &str, output_dir: &NormalizedPath) -> Self {
        Self {
            project: project.to_string(),
            output_dir: output_dir.as_str().to_string(),
            skipped: true,
            counts: Vec::new(),
        }
    }

    /// Total number of files written.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

impl Exporter {
    pub fn new(output_root: NormalizedPath, replacement: impl Into<String>) -> Self {
        Self {
            output_root,
            replacement: replacement.into(),
        }
    }

    /// Export every element of every kind from `wc`.
    ///
    /// The output folder is `<output root>/<project name>`. If it already
    /// exists the run is skipped with a warning rather than overwriting a
    /// prior export; that is not an error.
    pub async fn export(&self, wc: &dyn WorkingCopy) -> Result<ExportSummary> {
        let project_dir = self.output_root.join(wc.project_name());

        if project_dir.exists() {
            warn!(
                dir = %project_dir,
                "project output folder already exists; delete it and run the export again"
            );
            return Ok(ExportSummary::skipped(wc.project_name(), &project_dir));
        }

        fs::create_dir_all(project_dir.to_native())
            .map_err(|e| Error::io(project_dir.to_native(), e))?;

        let mut counts = Vec::with_capacity(ElementKind::ALL.len());
        for kind in ElementKind::ALL {
            let count = self.export_kind(wc, kind, &project_dir).await?;
            counts.push(KindCount { kind, count });
        }

        let summary = ExportSummary {
            project: wc.project_name().to_string(),
            output_dir: project_dir.as_str().to_string(),
            skipped: false,
            counts,
        };
        info!(
            project = %summary.project,
            files = summary.total(),
            "export complete"
        );
        Ok(summary)
    }

    async fn export_kind(
        &self,
        wc: &dyn WorkingCopy,
        kind: ElementKind,
        project_dir: &NormalizedPath,
    ) -> Result<usize> {
        let handles = wc.elements(kind);
        let mut count = 0;

        for handle in handles {
            let element = handle.load().await;
            let path = unique_path(project_dir, Some(&element.file_label()), &self.replacement);
            io::write_text(&path, &element.source)?;
            debug!(path = %path, "wrote element");
            count += 1;
        }

        info!(kind = %kind, count, "exported element kind");
        Ok(count)
    }
}
