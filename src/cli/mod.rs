//! Command-line interface for navgen.
//!
//! Each command is implemented as a separate module with its own argument
//! struct and execution logic, dispatched from [`Cli::execute`]. This keeps
//! the commands independently testable and their documentation close to
//! their flags.
//!
//! # Available Commands
//!
//! - `build` - expand and aggregate the data files into the JSON snapshot
//! - `validate` - check schema and referential integrity of all data files
//!
//! # Global Options
//!
//! All commands support:
//! - `--verbose` - debug-level logging
//! - `--quiet` - errors only, no progress output
//! - `--data-dir` - override the conventional `data/` directory
//!
//! # Usage
//!
//! ```bash
//! navgen validate
//! navgen validate --format json
//! navgen build
//! navgen --data-dir ./content build --output ./dist/navigation.json
//! ```

mod build;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_DATA_DIR;

/// Top-level CLI for the navigation site data pipeline.
///
/// Options marked `global = true` are available to all subcommands.
#[derive(Parser)]
#[command(
    name = "navgen",
    about = "Build-time data pipeline for a static navigation directory site",
    version,
    long_about = "navgen validates declarative YAML records describing categories, \
                  projects, environment URLs, and links, and generates the aggregated \
                  navigation snapshot the site renderer consumes."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors, for scripts and CI.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory containing the YAML data files.
    ///
    /// Defaults to the conventional `data/` directory relative to the
    /// working directory.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate the navigation snapshot from the data files.
    ///
    /// Reads categories, projects, and project environments, expands and
    /// aggregates them, and writes the JSON snapshot. Assumes the data
    /// already passed `navgen validate`; structurally broken files abort
    /// the build instead of producing a partial snapshot.
    Build(build::BuildCommand),

    /// Validate schema and referential integrity of all four data files.
    ///
    /// Prints per-file pass/fail status and an enumerated error list, and
    /// exits non-zero when any violation was found. Never stops at the
    /// first problem.
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging from the verbosity flags, resolves the data
    /// directory, and dispatches to the subcommand.
    ///
    /// # Errors
    ///
    /// Propagates fatal load/emit errors and the validation-failed error
    /// that drives the non-zero exit of `navgen validate`.
    pub fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let data_dir = self
            .data_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        match self.command {
            Commands::Build(cmd) => cmd.execute(&data_dir, self.quiet),
            Commands::Validate(cmd) => cmd.execute(&data_dir, self.quiet),
        }
    }
}

/// Initialize the tracing subscriber from the verbosity flags.
///
/// `RUST_LOG` still wins at the default verbosity, so targeted filters
/// keep working in CI.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
