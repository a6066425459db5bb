//! Kinds command implementation

use colored::Colorize;

use export_model::ElementKind;

use crate::error::Result;

/// Run the kinds command
///
/// Lists the element kinds in the order the exporter processes them.
pub fn run_kinds() -> Result<()> {
    for (index, kind) in ElementKind::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, kind.label().cyan());
    }
    Ok(())
}
