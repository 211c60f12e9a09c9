//! Command-line interface for mvnfo.
//!
//! This module provides CLI commands for generating NFO files for a music
//! video library, identifying single files, and managing the config file.

mod commands;

pub use commands::{Cli, Commands, run_command};
