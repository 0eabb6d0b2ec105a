//! Integration test suite for navgen
//!
//! End-to-end tests that drive the real binary over tempdir YAML fixtures
//! and assert on console output, exit codes, and the emitted snapshot.
//!
//! # Running
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **build**: snapshot generation, ordering, disabled-item filtering,
//!   fatal load errors
//! - **validate**: per-file reporting, exit codes, JSON output

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod build;
mod validate;
