//! Core types shared across the navgen pipeline.
//!
//! This module hosts the error taxonomy and the user-facing error display
//! path. The split the rest of the crate relies on:
//!
//! - [`NavgenError`] covers **infrastructural failures** - a data file that
//!   cannot be read or parsed, a snapshot that cannot be written. These are
//!   fatal and abort the run with a non-zero exit.
//! - Data problems (schema and integrity violations) are **never** errors at
//!   this level; they travel inside [`crate::validator::ValidationReport`]
//!   so a single run can report every violation at once.

pub mod error;

pub use error::{ErrorContext, NavgenError, user_friendly_error};
