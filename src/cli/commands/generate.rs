//! Batch NFO generation command.

use std::path::Path;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::enrichment::IdentificationService;
use crate::pipeline::{self, BatchOptions, BatchReport, FileOutcome};
use crate::scanner;

use super::{confirm, require_imvdb_key};

/// Parsed `generate` arguments
pub struct GenerateArgs<'a> {
    pub path: &'a Path,
    pub imvdb_api_key: Option<&'a str>,
    pub dry_run: bool,
    pub overwrite: bool,
    pub yes: bool,
    pub delay_ms: Option<u64>,
    pub artist_threshold: Option<f64>,
    pub report: Option<&'a Path>,
}

/// Generate NFO files for every video under a path
pub fn cmd_generate(rt: &Runtime, config: &Config, args: &GenerateArgs<'_>) -> anyhow::Result<()> {
    if !args.path.exists() {
        return Err(crate::error::Error::not_found(args.path).into());
    }

    let api_key = require_imvdb_key(config, args.imvdb_api_key)?;

    let files = scanner::discover(args.path, &config.batch.extensions);
    if files.is_empty() {
        println!("No video files found.");
        return Ok(());
    }

    println!("Found {} video file(s) in {:?}", files.len(), args.path);
    if files.len() > config.batch.confirm_above
        && !args.yes
        && !confirm(&format!("Process {} files?", files.len()))?
    {
        println!("Aborted.");
        return Ok(());
    }

    if args.dry_run {
        println!("DRY RUN - no NFO files will be written\n");
    }

    let mut identify_config = config.identify_config(Some(&api_key));
    if let Some(threshold) = args.artist_threshold {
        identify_config.artist_threshold = threshold;
    }
    let service = IdentificationService::new(identify_config);

    let options = BatchOptions {
        delay: args
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.batch.delay()),
        overwrite: args.overwrite,
        dry_run: args.dry_run,
    };

    let total = files.len();
    let report = rt.block_on(pipeline::run_batch(
        &service,
        &files,
        &options,
        |i, path, outcome| {
            let name = crate::enrichment::domain::display_name(path);
            match outcome {
                FileOutcome::Written { identification, .. } => println!(
                    "[{}/{}] {} ✓ {} ({})",
                    i, total, name, identification.record.title, identification.record.year
                ),
                FileOutcome::Resolved { identification } => println!(
                    "[{}/{}] {} ✓ {} (would write)",
                    i, total, name, identification.record.title
                ),
                FileOutcome::Skipped { .. } => {
                    println!("[{}/{}] {} - NFO exists, skipped", i, total, name)
                }
                FileOutcome::Failed(reason) => {
                    println!("[{}/{}] {} ✗ {}", i, total, name, reason)
                }
            }
        },
    ));

    println!();
    println!("{}", summary_line(&report));

    if !report.failed.is_empty() {
        println!("\nNo NFO for:");
        for failed in &report.failed {
            println!("  {}: {}", failed.name, failed.reason);
        }
    }

    if let Some(report_path) = args.report {
        pipeline::write_report(report_path, args.path, &report)?;
        println!("\nReport saved to {:?}", report_path);
    }

    if args.dry_run {
        println!("\nRun without --dry-run to write NFO files.");
    }

    Ok(())
}

/// One-line totals printed once the batch is done
fn summary_line(report: &BatchReport) -> String {
    let mut line = format!("Done! {} written", report.written);
    if report.resolved > 0 {
        line.push_str(&format!(", {} resolved (dry run)", report.resolved));
    }
    line.push_str(&format!(
        ", {} skipped, {} failed",
        report.skipped,
        report.failed_count()
    ));
    line
}
