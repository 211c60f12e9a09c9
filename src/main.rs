//! mvnfo - Kodi NFO files for a music video library.
//!
//! Identifies each `Artist/Artist - Title.ext` video against IMVDb and
//! TheAudioDB, checks the result against the folder it lives in, and writes
//! a `.nfo` sidecar next to the video.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod matching;
pub mod model;
pub mod nfo;
pub mod pipeline;
pub mod scanner;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("mvnfo=info".parse()?))
        .init();

    cli::run_command(&args)
}
