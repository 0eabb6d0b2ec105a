//! Snapshot writer for the aggregated navigation data.
//!
//! The emitter is a pure side-effecting sink: it wraps the category blocks
//! as `{ "categoryBlocks": [...] }`, pretty-prints the document, creates
//! any missing parent directories, and overwrites the prior snapshot
//! unconditionally. No transformation logic lives here.
//!
//! Concurrent builds racing on the output file are an accepted limitation;
//! only one writer ever touches the path within a single run.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::NavgenError;
use crate::model::{CategoryBlock, NavigationSnapshot};

/// Serialize the category blocks to the snapshot file.
///
/// # Errors
///
/// Returns [`NavgenError::SnapshotWrite`] when the parent directories or
/// the file itself cannot be written.
pub fn emit(blocks: &[CategoryBlock], output_path: &Path) -> Result<(), NavgenError> {
    let snapshot = NavigationSnapshot {
        category_blocks: blocks.to_vec(),
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| NavgenError::SnapshotWrite {
        path: output_path.display().to_string(),
        reason: e.to_string(),
    })?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| NavgenError::SnapshotWrite {
                path: output_path.display().to_string(),
                reason: format!("creating {}: {e}", parent.display()),
            })?;
        }
    }

    fs::write(output_path, json).map_err(|e| NavgenError::SnapshotWrite {
        path: output_path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(path = %output_path.display(), blocks = blocks.len(), "wrote snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Environment, NavigationItem};
    use tempfile::TempDir;

    fn sample_block() -> CategoryBlock {
        CategoryBlock {
            category: Category {
                id: "infra".into(),
                name: "Infrastructure".into(),
                description: None,
                icon: None,
                order: Some(1),
            },
            items: vec![NavigationItem {
                id: "svc-prod".into(),
                project_id: "svc".into(),
                project_name: "Service".into(),
                project_description: None,
                category_id: "infra".into(),
                env: Environment::Prod,
                url: "https://prod.example.com".into(),
                env_description: None,
                icon: None,
                enabled: true,
                order: 1,
            }],
        }
    }

    #[test]
    fn emit_creates_intermediate_directories_and_writes_the_contract_shape() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("site/src/data/navigation.json");

        emit(&[sample_block()], &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let parsed: NavigationSnapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.category_blocks.len(), 1);
        assert_eq!(parsed.category_blocks[0].items[0].id, "svc-prod");
        // The rendering layer depends on these exact field names.
        assert!(written.contains("\"categoryBlocks\""));
        assert!(written.contains("\"items\""));
        assert!(written.contains("\"category\""));
    }

    #[test]
    fn emit_overwrites_a_prior_snapshot_unconditionally() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("navigation.json");
        fs::write(&output, "{\"categoryBlocks\": [\"stale\"]}").unwrap();

        emit(&[], &output).unwrap();

        let parsed: NavigationSnapshot =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(parsed.category_blocks.is_empty());
    }
}
