//! Platform model seam and export engine
//!
//! The modeling platform's SDK is an opaque collaborator: it owns
//! authentication, revision resolution, model loading, and element
//! serialization. This crate defines the trait seam the exporter drives
//! ([`PlatformClient`], [`WorkingCopy`], [`LoadableElement`]), a
//! snapshot-file-backed implementation of that seam, and the engine that
//! walks a working copy and writes one file per element.

pub mod client;
pub mod config;
pub mod element;
pub mod error;
pub mod exporter;
pub mod snapshot;

pub use client::{LATEST_REVISION, LoadableElement, PlatformClient, ProjectRef, RevisionRef, WorkingCopy};
pub use config::ExportConfig;
pub use element::{Element, ElementKind};
pub use error::{Error, Result};
pub use exporter::{ExportSummary, Exporter, KindCount};
pub use snapshot::{ModelSnapshot, SnapshotClient, SnapshotWorkingCopy};
