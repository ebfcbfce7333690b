//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::checkup::DEFAULT_LOG_DIR;

/// Vitals - devcontainer health diagnostics.
#[derive(Debug, Parser)]
#[command(name = "vitals")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Strict mode: exit non-zero when the sandbox is unhealthy
    #[arg(long)]
    pub deep: bool,

    /// Suppress terminal output (the log and banner are still written)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Directory for the event log and status banner
    #[arg(long, env = "VITALS_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}
