//! CLI command definitions and dispatch.
//!
//! This module provides the command-line interface for mvnfo.
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `generate`: Batch NFO generation for a library
//! - `identify`: Single-file identification
//! - `settings`: Config file inspection and creation

mod generate;
mod identify;
mod settings;

use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use generate::cmd_generate;
pub use identify::cmd_identify;
pub use settings::{cmd_check_config, cmd_init_config};

/// Music video NFO generator
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate NFO files for every video under a directory
    Generate {
        /// Library root (or a single video file)
        path: PathBuf,
        /// IMVDb API key (or set IMVDB_API_KEY env var)
        #[arg(short = 'k', long, env = "IMVDB_API_KEY")]
        imvdb_api_key: Option<String>,
        /// Dry run - identify without writing any NFO
        #[arg(long)]
        dry_run: bool,
        /// Replace existing NFO files
        #[arg(long)]
        overwrite: bool,
        /// Don't ask for confirmation on large libraries
        #[arg(short, long)]
        yes: bool,
        /// Pause between files in milliseconds (default from config)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Minimum folder/artist similarity, 0-100 (default from config)
        #[arg(long)]
        artist_threshold: Option<f64>,
        /// Write a text report of failed files
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Identify a single video and print its metadata
    Identify {
        /// Path to the video file
        path: PathBuf,
        /// IMVDb API key (or set IMVDB_API_KEY env var)
        #[arg(short = 'k', long, env = "IMVDB_API_KEY")]
        imvdb_api_key: Option<String>,
        /// Write the NFO next to the video
        #[arg(long)]
        write: bool,
    },
    /// Show the active configuration
    CheckConfig,
    /// Write a default config file
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = crate::config::load();

    match &cli.command {
        Commands::Generate {
            path,
            imvdb_api_key,
            dry_run,
            overwrite,
            yes,
            delay_ms,
            artist_threshold,
            report,
        } => {
            let rt = Runtime::new()?;
            let args = generate::GenerateArgs {
                path,
                imvdb_api_key: imvdb_api_key.as_deref(),
                dry_run: *dry_run,
                overwrite: *overwrite,
                yes: *yes,
                delay_ms: *delay_ms,
                artist_threshold: *artist_threshold,
                report: report.as_deref(),
            };
            cmd_generate(&rt, &config, &args)
        }
        Commands::Identify {
            path,
            imvdb_api_key,
            write,
        } => {
            let rt = Runtime::new()?;
            cmd_identify(&rt, &config, path, imvdb_api_key.as_deref(), *write)
        }
        Commands::CheckConfig => cmd_check_config(&config),
        Commands::InitConfig { force } => cmd_init_config(*force),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Resolve the IMVDb key from the CLI/env or the config file
pub(crate) fn require_imvdb_key(
    config: &crate::config::Config,
    cli_key: Option<&str>,
) -> anyhow::Result<String> {
    let key = config.identify_config(cli_key).imvdb_api_key;
    if key.trim().is_empty() {
        eprintln!("Error: IMVDb API key required.");
        eprintln!("Get one at: https://imvdb.com/developers");
        eprintln!("Then use: --imvdb-api-key YOUR_KEY, set IMVDB_API_KEY, or run `mvnfo init-config`");
        anyhow::bail!("missing IMVDb API key");
    }
    Ok(key)
}

/// Ask a yes/no question on stdin
pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    use std::io::Write;
    std::io::stdout().flush()?;
    Ok(read_confirmation(&mut std::io::stdin().lock())?)
}

/// Only an explicit "y" or "yes" counts as consent
fn read_confirmation(reader: &mut impl BufRead) -> std::io::Result<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
