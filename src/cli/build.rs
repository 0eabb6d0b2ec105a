//! Build the navigation snapshot from the data files.
//!
//! The `build` command is the second half of the pipeline: it loads the
//! typed records (categories, projects, project environments - links are
//! not part of the build), runs the expander and aggregator, and writes
//! the snapshot through the emitter.
//!
//! It does **not** re-run the validator. The command trusts that the data
//! passed `navgen validate`; data that would have failed integrity checks
//! shows up here as silently dropped items (no matching category), while
//! structurally broken files are fatal load errors - the build never
//! substitutes empty data for an unreadable file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::constants::{
    CATEGORIES_FILE, DEFAULT_OUTPUT_PATH, PROJECTS_FILE, PROJECT_ENVS_FILE,
};
use crate::model::{Category, Project, ProjectEnv};
use crate::{aggregator, emitter, expander, loader};

/// Arguments for the `build` command.
#[derive(Args)]
pub struct BuildCommand {
    /// Path of the snapshot to write.
    ///
    /// Defaults to the conventional location under the rendering layer's
    /// source tree. Any existing file is overwritten; missing parent
    /// directories are created.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl BuildCommand {
    /// Execute the build pipeline: load, expand, aggregate, emit.
    ///
    /// Prints a short progress summary unless `quiet` is set, and exits 0
    /// on success. Fatal load errors propagate to `main`.
    pub fn execute(self, data_dir: &Path, quiet: bool) -> Result<()> {
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let categories: Vec<Category> = loader::load_records(&data_dir.join(CATEGORIES_FILE))?;
        let projects: Vec<Project> = loader::load_records(&data_dir.join(PROJECTS_FILE))?;
        let project_envs: Vec<ProjectEnv> =
            loader::load_records(&data_dir.join(PROJECT_ENVS_FILE))?;
        if !quiet {
            println!(
                "{} Loaded {} categories, {} projects, {} project environments",
                "✓".green(),
                categories.len(),
                projects.len(),
                project_envs.len()
            );
        }

        let items = expander::expand(&projects, &project_envs);
        if !quiet {
            println!("{} Expanded {} navigation items", "✓".green(), items.len());
        }

        let blocks = aggregator::aggregate(&categories, &items);
        if !quiet {
            println!("{} Aggregated {} category blocks", "✓".green(), blocks.len());
        }

        emitter::emit(&blocks, &output)?;
        info!(path = %output.display(), "snapshot written");
        if !quiet {
            println!("{} Wrote {}", "✓".green(), output.display());
        }

        Ok(())
    }
}
