//! Command-line interface for the SCL-90 service.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SCL-90 questionnaire scoring and analytics service
#[derive(Parser)]
#[command(name = "scl90")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Create the default config file
    #[command(alias = "--init")]
    Init {
        /// Where to write the file
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Score a JSON array of 90 responses and print the report
    Score {
        /// Path to the JSON file, or `-` for stdin
        file: String,
    },

    /// Write the CSV report of a stored assessment
    Export {
        /// Assessment ID
        id: i32,
        /// Output file, defaults to the dated report name
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the seven-day dashboard overview
    Overview,
}

pub use commands::*;
