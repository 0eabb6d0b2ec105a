//! navgen CLI entry point
//!
//! This is the main executable for the navigation site data pipeline.
//! It handles command-line argument parsing, error display, and command
//! execution.
//!
//! The CLI exposes two independent commands:
//! - `build` - expand and aggregate the data files into the JSON snapshot
//! - `validate` - check schema and referential integrity of all data files

use anyhow::Result;
use clap::Parser;
use navgen::cli;
use navgen::core::error::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
