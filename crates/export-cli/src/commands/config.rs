//! Config command implementations

use colored::Colorize;

use export_fs::NormalizedPath;
use export_model::ExportConfig;

use crate::error::Result;

const REDACTED: &str = "<redacted>";

/// Run the config show command
///
/// Prints the resolved configuration with the API key redacted.
pub fn run_config_show(config_path: &str, json: bool) -> Result<()> {
    let mut config = ExportConfig::load(&NormalizedPath::new(config_path))?;
    config.auth.api_key = REDACTED.to_string();

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{} {}", "config:".dimmed(), config_path.cyan());
    println!("  username:    {}", config.auth.username);
    println!("  api key:     {}", config.auth.api_key.dimmed());
    println!("  project:     {} ({})", config.project.name.green(), config.project.id);
    println!("  branch:      {}", config.project.branch);
    if config.revision_ref().is_latest() {
        println!("  revision:    latest");
    } else {
        println!("  revision:    {}", config.export.revision);
    }
    println!("  output dir:  {}", config.export.output_dir);
    println!("  replacement: {:?}", config.export.replacement);
    Ok(())
}
