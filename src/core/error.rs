//! Error handling for navgen
//!
//! This module provides the error types and user-friendly error reporting
//! for the pipeline. The error system is designed around two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`NavgenError`] - Enumerated error types for all fatal failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Taxonomy
//!
//! Only infrastructural failures become [`NavgenError`] values:
//! - **Load errors**: [`NavgenError::DataFileNotFound`],
//!   [`NavgenError::DataFileRead`], [`NavgenError::DataFileParse`],
//!   [`NavgenError::DataFileShape`]
//! - **Emit errors**: [`NavgenError::SnapshotWrite`]
//! - **Aggregate outcome**: [`NavgenError::ValidationFailed`], raised by the
//!   `validate` command after the full report has been printed
//!
//! Schema violations and integrity violations are data problems, not errors;
//! they are collected in [`crate::validator::ValidationReport`] and reported
//! in one pass. The two failure classes must stay distinguishable: a file
//! that cannot even be parsed aborts the run, while a parseable file full of
//! bad records yields a complete violation list.
//!
//! Use [`user_friendly_error`] to convert any error into a displayable
//! format with contextual suggestions.
//!
//! # Examples
//!
//! ```rust,no_run
//! use navgen::core::{NavgenError, user_friendly_error};
//!
//! fn load_something() -> Result<(), NavgenError> {
//!     Err(NavgenError::DataFileNotFound { path: "data/projects.yaml".into() })
//! }
//!
//! if let Err(e) = load_something() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display(); // colored error with suggestion, to stderr
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for fatal navgen failures.
///
/// Each variant represents a specific infrastructural failure mode and
/// carries enough context (usually the offending path) to produce an
/// actionable message. Data-level violations are deliberately absent from
/// this enum; see the module docs for the taxonomy.
#[derive(Error, Debug, Clone)]
pub enum NavgenError {
    /// A required data file does not exist.
    #[error("Data file not found: {path}")]
    DataFileNotFound {
        /// Path of the missing file
        path: String,
    },

    /// A data file exists but could not be read.
    #[error("Failed to read data file '{path}': {reason}")]
    DataFileRead {
        /// Path of the unreadable file
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// A data file is not parseable as YAML.
    #[error("Failed to parse '{path}': {reason}")]
    DataFileParse {
        /// Path of the malformed file
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// A data file parsed, but its top level is not a sequence of records.
    #[error("Unexpected document shape in '{path}': expected a top-level sequence of records, found {found}")]
    DataFileShape {
        /// Path of the malformed file
        path: String,
        /// The YAML node kind that was found instead
        found: String,
    },

    /// The snapshot file could not be written.
    #[error("Failed to write snapshot '{path}': {reason}")]
    SnapshotWrite {
        /// Path of the snapshot that failed to write
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// The aggregate validation report contained one or more errors.
    ///
    /// Raised by the `validate` command after the full report was printed,
    /// so `main` turns it into a non-zero exit.
    #[error("Validation failed with {count} error(s)")]
    ValidationFailed {
        /// Number of errors in the report
        count: usize,
    },

    /// Generic error with a plain message.
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// User-friendly error wrapper for CLI display.
///
/// `ErrorContext` wraps a [`NavgenError`] and adds optional suggestions and
/// details. This is how navgen presents fatal errors to CLI users.
///
/// # Display Format
///
/// 1. **error**: the main message, in red
/// 2. **details**: additional context, in yellow (optional)
/// 3. **suggestion**: actionable resolution steps, in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use navgen::core::{ErrorContext, NavgenError};
///
/// let context = ErrorContext::new(NavgenError::DataFileNotFound {
///     path: "data/categories.yaml".into(),
/// })
/// .with_suggestion("Run from the repository root, or pass --data-dir");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: NavgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: NavgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions should be actionable steps; they are displayed in green
    /// to draw attention.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details provide context about why the error occurred; they are
    /// displayed in yellow, less prominent than the suggestion.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// This is the single conversion point `main` uses before displaying a
/// fatal error. It recognizes [`NavgenError`] variants and attaches
/// variant-specific suggestions; I/O errors get filesystem guidance;
/// anything else is shown as-is.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(navgen_error) = error.downcast_ref::<NavgenError>() {
        return create_error_context(navgen_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(NavgenError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions on the data and output directories");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(NavgenError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(NavgenError::Other {
        message: format!("{error:#}"),
    })
}

/// Attach variant-specific details and suggestions to a [`NavgenError`].
fn create_error_context(error: NavgenError) -> ErrorContext {
    match &error {
        NavgenError::DataFileNotFound { .. } => ErrorContext::new(error)
            .with_details("All four data files must exist under the data directory")
            .with_suggestion(
                "Run navgen from the repository root, or point --data-dir at the directory containing the YAML files",
            ),
        NavgenError::DataFileParse { .. } | NavgenError::DataFileShape { .. } => {
            ErrorContext::new(error)
                .with_details(
                    "Each data file must be a YAML document whose top level is a sequence of records",
                )
                .with_suggestion("Fix the YAML syntax, then re-run 'navgen validate'")
        }
        NavgenError::SnapshotWrite { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the output directory is writable"),
        NavgenError::ValidationFailed { .. } => ErrorContext::new(error)
            .with_suggestion("Fix the reported violations in the data files and re-run 'navgen validate'"),
        _ => ErrorContext::new(error),
    }
}
