//! Model Export CLI
//!
//! The command-line interface for exporting a low-code application model
//! into individual serialized files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, ConfigAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Model Export CLI", "model-export".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "model-export --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Export {
            config,
            snapshot,
            out,
            json,
        } => commands::run_export(&config, &snapshot, out.as_deref(), json),
        Commands::Config {
            action: ConfigAction::Show { config, json },
        } => commands::run_config_show(&config, json),
        Commands::Kinds => commands::run_kinds(),
    }
}
