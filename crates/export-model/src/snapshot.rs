//! Snapshot-file-backed implementation of the platform seam.
//!
//! A model snapshot is a local file holding the already-serialized elements
//! of a project, grouped by kind. It stands in for the hosted platform when
//! exporting offline and doubles as the test double for the export engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use export_fs::{ConfigStore, NormalizedPath};

use crate::client::{LoadableElement, PlatformClient, ProjectRef, RevisionRef, WorkingCopy};
use crate::element::{Element, ElementKind};
use crate::error::{Error, Result};

/// One serialized element in a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotElement {
    pub qualified_name: String,
    pub source: String,
}

/// On-disk shape of a model snapshot (TOML/JSON/YAML).
///
/// Any kind table may be omitted; an absent table exports zero files of
/// that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub project: String,
    #[serde(default)]
    pub constants: Vec<SnapshotElement>,
    #[serde(default)]
    pub domain_models: Vec<SnapshotElement>,
    #[serde(default)]
    pub enumerations: Vec<SnapshotElement>,
    #[serde(default)]
    pub microflows: Vec<SnapshotElement>,
    #[serde(default)]
    pub pages: Vec<SnapshotElement>,
    #[serde(default)]
    pub snippets: Vec<SnapshotElement>,
}

impl ModelSnapshot {
    fn kind_elements(&self, kind: ElementKind) -> &[SnapshotElement] {
        match kind {
            ElementKind::Constant => &self.constants,
            ElementKind::DomainModel => &self.domain_models,
            ElementKind::Enumeration => &self.enumerations,
            ElementKind::Microflow => &self.microflows,
            ElementKind::Page => &self.pages,
            ElementKind::Snippet => &self.snippets,
        }
    }
}

/// A loaded snapshot acting as a working copy.
#[derive(Debug)]
pub struct SnapshotWorkingCopy {
    project: String,
    elements: Vec<SnapshotLoadable>,
}

#[derive(Debug)]
struct SnapshotLoadable {
    element: Element,
}

#[async_trait]
impl LoadableElement for SnapshotLoadable {
    async fn load(&self) -> Element {
        self.element.clone()
    }
}

impl SnapshotWorkingCopy {
    pub fn new(snapshot: ModelSnapshot) -> Self {
        let mut elements = Vec::new();
        for kind in ElementKind::ALL {
            for entry in snapshot.kind_elements(kind) {
                elements.push(SnapshotLoadable {
                    element: Element {
                        kind,
                        qualified_name: entry.qualified_name.clone(),
                        source: entry.source.clone(),
                    },
                });
            }
        }
        Self {
            project: snapshot.project,
            elements,
        }
    }
}

impl WorkingCopy for SnapshotWorkingCopy {
    fn project_name(&self) -> &str {
        &self.project
    }

    fn elements(&self, kind: ElementKind) -> Vec<&dyn LoadableElement> {
        self.elements
            .iter()
            .filter(|loadable| loadable.element.kind == kind)
            .map(|loadable| loadable as &dyn LoadableElement)
            .collect()
    }
}

/// Platform client reading working copies from a snapshot file.
pub struct SnapshotClient {
    path: NormalizedPath,
}

impl SnapshotClient {
    pub fn new(path: NormalizedPath) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PlatformClient for SnapshotClient {
    type WorkingCopy = SnapshotWorkingCopy;

    async fn create_working_copy(
        &self,
        project: &ProjectRef,
        revision: &RevisionRef,
    ) -> Result<Self::WorkingCopy> {
        debug!(
            snapshot = %self.path,
            branch = %revision.branch,
            revision = revision.number,
            "reading model snapshot"
        );

        // A snapshot file always represents the state it was taken at; the
        // requested revision only matters against the live platform.
        if !revision.is_latest() {
            warn!(
                revision = revision.number,
                "snapshot client ignores pinned revisions and serves the snapshot as-is"
            );
        }

        let snapshot: ModelSnapshot =
            ConfigStore::new()
                .load(&self.path)
                .map_err(|e| Error::WorkingCopy {
                    project: project.name.clone(),
                    message: e.to_string(),
                })?;

        if snapshot.project != project.name {
            warn!(
                configured = %project.name,
                snapshot = %snapshot.project,
                "snapshot project name differs from configured project"
            );
        }

        Ok(SnapshotWorkingCopy::new(snapshot))
    }
}
