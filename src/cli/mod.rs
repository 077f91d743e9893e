//! Command-line interface for migramap
//!
//! - Argument parsing (this module)
//! - Runtime setup: logging and the rayon pool (`setup`)

pub mod setup;

pub use setup::{configure_thread_pool, init_logging, log_level};

use crate::output::ConsoleFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "migramap")]
#[command(about = "Inventory legacy front-end constructs and plan their migration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a source tree and write the component analysis report
    Analyze {
        /// Directory to scan
        #[arg(default_value = "app")]
        path: PathBuf,

        /// Report file (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Console rendering of the summary block
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ConsoleFormat,

        /// Configuration file (defaults to the nearest .migramap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress the progress bar and console report
        #[arg(short, long)]
        quiet: bool,

        /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Disable colored output
        #[arg(long = "plain")]
        plain: bool,

        /// Analyze files sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
