//! Shared fixture helpers for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A tempdir holding a `data/` directory with the four YAML files.
pub struct Fixture {
    pub root: TempDir,
}

impl Fixture {
    /// Create an empty fixture with a `data/` directory.
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("data")).unwrap();
        Self { root }
    }

    /// A consistent minimal dataset: one category, one project, two
    /// environments (prod and test), no links.
    pub fn valid() -> Self {
        let fixture = Self::new();
        fixture
            .write("categories.yaml", "- id: infra\n  name: Infrastructure\n  order: 1\n")
            .write(
                "projects.yaml",
                "- id: svc\n  name: Service\n  categoryId: infra\n",
            )
            .write(
                "project-envs.yaml",
                "- projectId: svc\n  env: prod\n  url: https://prod.example.com\n  enabled: true\n\
                 - projectId: svc\n  env: test\n  url: https://test.example.com\n  enabled: true\n",
            )
            .write("links.yaml", "[]\n");
        fixture
    }

    /// Write (or overwrite) one of the data files.
    pub fn write(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.data_dir().join(name), contents).unwrap();
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.path().join("out/navigation.json")
    }
}

/// The navgen binary pointed at the fixture's data directory.
pub fn navgen(fixture: &Fixture) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("navgen").unwrap();
    cmd.arg("--data-dir").arg(fixture.data_dir());
    cmd
}

/// Read and parse the snapshot a build wrote.
pub fn read_snapshot(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
