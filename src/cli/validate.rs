//! Validate the data files and report every violation.
//!
//! The `validate` command loads all four data files as untyped records and
//! runs the full [`crate::validator`] check suite. It prints per-file
//! pass/fail status and, on failure, the enumerated error list; with
//! `--format json` the whole [`ValidationReport`] is printed as a JSON
//! document instead, for CI consumption.
//!
//! Exit behavior: status 0 when the aggregate report is valid, 1
//! otherwise (via the error path in `main`). A file that cannot be read
//! or parsed at all is a fatal load error, not a validation result - the
//! two failure classes stay distinguishable.
//!
//! # Examples
//!
//! ```bash
//! navgen validate
//! navgen validate --format json
//! navgen --data-dir ./content validate
//! ```
//!
//! Text output:
//!
//! ```text
//! ✓ categories.yaml
//! ✓ projects.yaml
//! ✗ project-envs.yaml
//! ✓ links.yaml
//! ✓ cross-file references
//!
//! Errors:
//!   - project-envs: unknown projectId 'ghost'
//! ```

use std::path::Path;

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

use crate::constants::{CATEGORIES_FILE, LINKS_FILE, PROJECTS_FILE, PROJECT_ENVS_FILE};
use crate::core::NavgenError;
use crate::validator::{self, ValidationReport};
use crate::loader;

/// Output format for validation results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-file status lines (default).
    #[default]
    Text,
    /// The full report as a JSON document.
    Json,
}

/// Arguments for the `validate` command.
#[derive(Args)]
pub struct ValidateCommand {
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ValidateCommand {
    /// Execute the validation pass over all four data files.
    ///
    /// # Errors
    ///
    /// Returns a fatal load error when a file cannot be read or parsed,
    /// or [`NavgenError::ValidationFailed`] after printing an invalid
    /// report, so `main` exits non-zero.
    pub fn execute(self, data_dir: &Path, quiet: bool) -> Result<()> {
        let categories = loader::load_raw(&data_dir.join(CATEGORIES_FILE))?;
        let projects = loader::load_raw(&data_dir.join(PROJECTS_FILE))?;
        let project_envs = loader::load_raw(&data_dir.join(PROJECT_ENVS_FILE))?;
        let links = loader::load_raw(&data_dir.join(LINKS_FILE))?;

        let report = validator::validate(&categories, &projects, &project_envs, &links);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !quiet {
                    print_text_report(&report);
                }
            }
        }

        if report.valid {
            Ok(())
        } else {
            Err(NavgenError::ValidationFailed {
                count: report.errors.len(),
            }
            .into())
        }
    }
}

/// Per-file pass/fail lines, then the enumerated errors when any exist.
fn print_text_report(report: &ValidationReport) {
    print_status(CATEGORIES_FILE, report.categories_valid);
    print_status(PROJECTS_FILE, report.projects_valid);
    print_status(PROJECT_ENVS_FILE, report.project_envs_valid);
    print_status(LINKS_FILE, report.links_valid);
    print_status("cross-file references", report.cross_references_valid);

    if report.valid {
        println!("\n{} All data files are valid", "✓".green());
    } else {
        println!("\n{}:", "Errors".red().bold());
        for error in &report.errors {
            println!("  - {error}");
        }
    }
}

fn print_status(subject: &str, passed: bool) {
    if passed {
        println!("{} {subject}", "✓".green());
    } else {
        println!("{} {subject}", "✗".red());
    }
}
