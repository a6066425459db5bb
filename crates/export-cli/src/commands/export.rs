//! Export command implementation
//!
//! Wires config, snapshot client, and engine together for one run.

use colored::Colorize;

use export_fs::NormalizedPath;
use export_model::{ExportConfig, ExportSummary, Exporter, PlatformClient, SnapshotClient};

use crate::error::Result;

/// Run the export command
pub fn run_export(
    config_path: &str,
    snapshot_path: &str,
    out_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = ExportConfig::load(&NormalizedPath::new(config_path))?;

    let output_root = NormalizedPath::new(
        out_override.unwrap_or(config.export.output_dir.as_str()),
    );
    let client = SnapshotClient::new(NormalizedPath::new(snapshot_path));
    let exporter = Exporter::new(output_root, config.export.replacement.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let summary = runtime.block_on(async {
        let wc = client
            .create_working_copy(&config.project_ref(), &config.revision_ref())
            .await?;
        exporter.export(&wc).await
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &ExportSummary) {
    if summary.skipped {
        println!(
            "{} Output folder {} already exists. Delete it and run the export again.",
            "SKIPPED".yellow().bold(),
            summary.output_dir.cyan()
        );
        return;
    }

    println!(
        "{} Exported {} to {}",
        "=>".blue().bold(),
        summary.project.green().bold(),
        summary.output_dir.cyan()
    );
    for entry in &summary.counts {
        println!("   {} {:<12} {}", "-".dimmed(), entry.kind, entry.count);
    }
    println!(
        "{} {} files written.",
        "OK".green().bold(),
        summary.total()
    );
}
