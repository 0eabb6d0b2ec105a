//! File reading and YAML deserialization for the data files.
//!
//! The loader is deliberately dumb: it reads a file, parses it as YAML, and
//! insists the top level is a sequence of records. It performs no semantic
//! validation - a malformed file surfaces as a fatal [`NavgenError`] load
//! error, which keeps load failures distinguishable from the schema and
//! integrity violations the validator reports.
//!
//! Two entry points serve the two commands:
//! - [`load_raw`] keeps records untyped ([`serde_yaml::Value`]) so the
//!   schema layer can report precise per-field violations - the `validate`
//!   path.
//! - [`load_records`] deserializes straight into typed records - the
//!   `build` path, which trusts previously validated data and treats any
//!   structural mismatch as fatal rather than substituting empty data.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::debug;

use crate::core::NavgenError;
use crate::schema::value_kind;

/// Read a data file as an untyped sequence of YAML records.
///
/// An empty document (or one containing only comments) parses as YAML null
/// and is treated as an empty record list. Any other non-sequence top level
/// is a fatal shape error.
///
/// # Errors
///
/// - [`NavgenError::DataFileNotFound`] when the file does not exist
/// - [`NavgenError::DataFileRead`] for any other read failure
/// - [`NavgenError::DataFileParse`] when the contents are not valid YAML
/// - [`NavgenError::DataFileShape`] when the top level is not a sequence
pub fn load_raw(path: &Path) -> Result<Vec<Value>, NavgenError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NavgenError::DataFileNotFound { path: display.clone() }
        } else {
            NavgenError::DataFileRead {
                path: display.clone(),
                reason: e.to_string(),
            }
        }
    })?;

    let document: Value =
        serde_yaml::from_str(&contents).map_err(|e| NavgenError::DataFileParse {
            path: display.clone(),
            reason: e.to_string(),
        })?;

    let records = match document {
        Value::Sequence(records) => records,
        Value::Null => Vec::new(),
        other => {
            return Err(NavgenError::DataFileShape {
                path: display,
                found: value_kind(&other).to_string(),
            });
        }
    };

    debug!(path = %path.display(), count = records.len(), "loaded raw records");
    Ok(records)
}

/// Read a data file directly into typed records.
///
/// Used by the build pipeline, which assumes its inputs already passed
/// `navgen validate`. A record that cannot deserialize into `T` is a fatal
/// parse error naming the offending index; the build must never silently
/// produce a partial or empty snapshot from broken input.
///
/// # Errors
///
/// Everything [`load_raw`] returns, plus [`NavgenError::DataFileParse`]
/// when an individual record does not match the expected shape.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, NavgenError> {
    let raw = load_raw(path)?;
    let mut records = Vec::with_capacity(raw.len());
    for (i, value) in raw.into_iter().enumerate() {
        let record = serde_yaml::from_value(value).map_err(|e| NavgenError::DataFileParse {
            path: path.display().to_string(),
            reason: format!("records[{i}]: {e}"),
        })?;
        records.push(record);
    }
    Ok(records)
}
