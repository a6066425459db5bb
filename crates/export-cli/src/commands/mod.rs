//! Command implementations for export-cli

pub mod config;
pub mod export;
pub mod kinds;

pub use config::run_config_show;
pub use export::run_export;
pub use kinds::run_kinds;
