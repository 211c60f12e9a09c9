//! Sequential batch driver.
//!
//! Files are processed one at a time: parse the name, skip videos that
//! already have an NFO, identify, then write. Nothing is shared between
//! iterations except the [`BatchReport`] being built.

mod report;

pub use report::{render_report, write_report};

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::enrichment::domain::{IdentifyError, VideoFile, display_name};
use crate::enrichment::service::{Identification, IdentificationService};
use crate::enrichment::traits::{TrackDatabaseApi, VideoDatabaseApi};
use crate::nfo;

/// Pause between network-bound files when nothing else is configured
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Options for a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Sleep before each file that hits the network, except the first
    pub delay: Duration,
    /// Replace NFO files that already exist
    pub overwrite: bool,
    /// Resolve everything but write nothing
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            overwrite: false,
            dry_run: false,
        }
    }
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Written {
        nfo_path: PathBuf,
        identification: Identification,
    },
    /// Dry run: would have been written
    Resolved { identification: Identification },
    /// An NFO already exists next to the video
    Skipped { nfo_path: PathBuf },
    Failed(IdentifyError),
}

/// A file that did not get an NFO, with the reason
#[derive(Debug, Clone, PartialEq)]
pub struct FailedFile {
    pub path: PathBuf,
    pub name: String,
    pub reason: IdentifyError,
}

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub total: usize,
    pub written: usize,
    /// Dry-run resolutions that would have been written
    pub resolved: usize,
    pub skipped: usize,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    fn record(&mut self, path: &Path, outcome: &FileOutcome) {
        self.total += 1;
        match outcome {
            FileOutcome::Written { .. } => self.written += 1,
            FileOutcome::Resolved { .. } => self.resolved += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed(reason) => self.failed.push(FailedFile {
                path: path.to_path_buf(),
                name: display_name(path),
                reason: reason.clone(),
            }),
        }
    }
}

/// Process `files` in order and report on every one of them.
///
/// `on_file` is called after each file with its 1-based position, so the
/// caller can print progress.
pub async fn run_batch<V, T, F>(
    service: &IdentificationService<V, T>,
    files: &[PathBuf],
    options: &BatchOptions,
    mut on_file: F,
) -> BatchReport
where
    V: VideoDatabaseApi,
    T: TrackDatabaseApi,
    F: FnMut(usize, &Path, &FileOutcome),
{
    let mut report = BatchReport::default();
    let mut network_used = false;

    for (i, path) in files.iter().enumerate() {
        let outcome = match prepare(path, options) {
            Ok(file) => {
                if network_used && !options.delay.is_zero() {
                    tokio::time::sleep(options.delay).await;
                }
                network_used = true;
                process_file(service, &file, options).await
            }
            Err(outcome) => outcome,
        };

        if let FileOutcome::Failed(reason) = &outcome {
            tracing::warn!("{}: {}", display_name(path), reason);
        }

        on_file(i + 1, path, &outcome);
        report.record(path, &outcome);
    }

    tracing::info!(
        "Batch finished: {} total, {} written, {} skipped, {} failed",
        report.total,
        report.written,
        report.skipped,
        report.failed_count()
    );
    report
}

/// Everything decided without touching the network
fn prepare(path: &Path, options: &BatchOptions) -> Result<VideoFile, FileOutcome> {
    let file = VideoFile::from_path(path).map_err(FileOutcome::Failed)?;

    let nfo_path = file.nfo_path();
    if !options.overwrite && nfo_path.exists() {
        tracing::debug!("Skipping {:?}, NFO exists", path);
        return Err(FileOutcome::Skipped { nfo_path });
    }

    Ok(file)
}

/// Identify one parsed file and write its NFO unless this is a dry run.
pub async fn process_file<V, T>(
    service: &IdentificationService<V, T>,
    file: &VideoFile,
    options: &BatchOptions,
) -> FileOutcome
where
    V: VideoDatabaseApi,
    T: TrackDatabaseApi,
{
    let identification = match service.identify(file).await {
        Ok(identification) => identification,
        Err(e) => return FileOutcome::Failed(e),
    };

    if options.dry_run {
        return FileOutcome::Resolved { identification };
    }

    let nfo_path = file.nfo_path();
    match nfo::write(&nfo_path, &identification.record) {
        Ok(()) => FileOutcome::Written {
            nfo_path,
            identification,
        },
        Err(e) => FileOutcome::Failed(IdentifyError::Write(e.to_string())),
    }
}
