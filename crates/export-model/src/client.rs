//! The trait seam between the exporter and the modeling platform.
//!
//! The platform SDK is not reimplemented here. These traits describe the
//! narrow slice the exporter needs: create a working copy for a project at
//! a revision, enumerate element handles per kind, and load each handle
//! into a serialized [`Element`].

use async_trait::async_trait;

use crate::element::{Element, ElementKind};
use crate::error::Result;

/// Revision number meaning "most recent on the branch".
pub const LATEST_REVISION: i64 = -1;

/// A project as the platform identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

/// A revision on a named branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRef {
    pub number: i64,
    pub branch: String,
}

impl RevisionRef {
    /// The latest revision on `branch`.
    pub fn latest(branch: impl Into<String>) -> Self {
        Self {
            number: LATEST_REVISION,
            branch: branch.into(),
        }
    }

    pub fn is_latest(&self) -> bool {
        self.number == LATEST_REVISION
    }
}

/// A lazily loadable element handle.
///
/// Loading cannot fail by contract: the platform's load callback carries an
/// error slot that is never invoked, so a failed load never resolves rather
/// than surfacing an error. Implementations must uphold the same
/// single-resolution behavior instead of inventing an error path.
#[async_trait]
pub trait LoadableElement: Send + Sync {
    async fn load(&self) -> Element;
}

/// A revision-bound snapshot of a project's model.
pub trait WorkingCopy: Send + Sync {
    /// The project's display name; names the output folder.
    fn project_name(&self) -> &str;

    /// Handles for every element of `kind`, in model order.
    fn elements(&self, kind: ElementKind) -> Vec<&dyn LoadableElement>;
}

/// A client able to produce working copies.
#[async_trait]
pub trait PlatformClient {
    type WorkingCopy: WorkingCopy;

    async fn create_working_copy(
        &self,
        project: &ProjectRef,
        revision: &RevisionRef,
    ) -> Result<Self::WorkingCopy>;
}
