//! CLI argument definitions.
//!
//! This module defines the CLI arguments using clap's derive macros.

use clap::Parser;
use std::path::PathBuf;

/// eslint-audit - Check an eslintrc against the upstream rules documentation.
#[derive(Debug, Parser)]
#[command(name = "eslint-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON configuration file to check
    #[arg(short, long)]
    pub file: PathBuf,
}
