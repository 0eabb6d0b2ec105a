//! Well-known file names and paths used throughout the navgen codebase.
//!
//! The data directory layout and the snapshot location are a fixed
//! convention shared with the rendering layer. Defining them centrally
//! keeps the CLI defaults and the tests in agreement.

/// Conventional directory holding the YAML source files, relative to the
/// invocation's working directory. Overridable with `--data-dir`.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Category definitions (`data/categories.yaml`).
pub const CATEGORIES_FILE: &str = "categories.yaml";

/// Project definitions (`data/projects.yaml`).
pub const PROJECTS_FILE: &str = "projects.yaml";

/// Project-to-environment URL bindings (`data/project-envs.yaml`).
pub const PROJECT_ENVS_FILE: &str = "project-envs.yaml";

/// Standalone links (`data/links.yaml`). Loaded and validated only; links
/// never flow into the expansion/aggregation pipeline.
pub const LINKS_FILE: &str = "links.yaml";

/// Default snapshot path under the rendering layer's source tree.
/// Overridable with `navgen build --output`.
pub const DEFAULT_OUTPUT_PATH: &str = "site/src/data/navigation.json";

/// Sort sentinel for categories that declare no `order` field.
///
/// Categories without an explicit order sort after every explicitly
/// ordered category; ties keep their relative input order.
pub const DEFAULT_CATEGORY_ORDER: u32 = 999;
