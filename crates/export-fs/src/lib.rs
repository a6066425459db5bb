//! Filesystem primitives for the model export toolkit
//!
//! Provides normalized path handling, unique output-path resolution,
//! and safe I/O operations.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod unique;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use unique::{FORBIDDEN_CHARS, sanitize_label, unique_path};
