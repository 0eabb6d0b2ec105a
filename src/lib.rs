//! navgen - build-time data pipeline for a static navigation directory site
//!
//! navgen reads declarative YAML records describing categories, projects,
//! per-environment URLs, and standalone links, validates their structure and
//! referential integrity, expands projects and environments into flat
//! navigation entries, and aggregates those entries into the category-grouped
//! JSON snapshot the page renderer consumes.
//!
//! # Architecture Overview
//!
//! The pipeline is a small relational model enforced entirely at build time:
//! - `data/categories.yaml` defines the grouping buckets
//! - `data/projects.yaml` defines services, each belonging to one category
//! - `data/project-envs.yaml` binds projects to environment URLs
//! - `data/links.yaml` holds standalone links (validated, not rendered here)
//!
//! Two independently invocable commands share the loader and schema layer:
//!
//! ```text
//! validate:  Loader -> Validator        (schema + integrity report)
//! build:     Loader -> Expander -> Aggregator -> Emitter
//! ```
//!
//! ## Key Properties
//!
//! - **Deterministic**: one batch transformation per invocation, no runtime
//!   mutation, no network, no concurrency
//! - **Complete reporting**: validation never stops at the first problem;
//!   every schema and integrity violation in a run is collected
//! - **Fail-loud loading**: an unreadable or structurally malformed file
//!   aborts the run rather than substituting empty data
//!
//! # Core Modules
//!
//! ## Pipeline Stages
//! - [`loader`] - File reading and YAML deserialization
//! - [`schema`] - Per-entity structural validators over untyped records
//! - [`validator`] - Schema plus cross-entity integrity checks
//! - [`expander`] - Projects x environments cross join
//! - [`aggregator`] - Category grouping, filtering, and ordering
//! - [`emitter`] - JSON snapshot writer
//!
//! ## Supporting Modules
//! - [`cli`] - Command-line interface (`build` and `validate` subcommands)
//! - [`constants`] - Well-known file names and paths
//! - [`core`] - Error types and user-facing error display
//! - [`model`] - Typed entity records and the environment enumeration
//!
//! # Data Format (data/*.yaml)
//!
//! Each data file holds a top-level sequence of mappings with camelCase keys:
//!
//! ```yaml
//! # data/projects.yaml
//! - id: svc
//!   name: Service
//!   categoryId: infra
//!
//! # data/project-envs.yaml
//! - projectId: svc
//!   env: prod
//!   url: https://prod.example.com
//! - projectId: svc
//!   env: test
//!   url: https://test.example.com
//!   enabled: false
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Check every schema and integrity rule, exit non-zero on violations
//! navgen validate
//!
//! # Same report as a JSON document for CI consumption
//! navgen validate --format json
//!
//! # Generate site/src/data/navigation.json
//! navgen build
//!
//! # Custom locations
//! navgen --data-dir ./content build --output ./dist/navigation.json
//! ```

// Pipeline stages
pub mod aggregator;
pub mod emitter;
pub mod expander;
pub mod loader;
pub mod schema;
pub mod validator;

// Supporting modules
pub mod cli;
pub mod constants;
pub mod core;
pub mod model;
