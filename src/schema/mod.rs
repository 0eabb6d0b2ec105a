//! Structural validators for each entity type.
//!
//! This is the schema layer of the pipeline: for every entity type there is
//! one composable check that accepts an untyped array of YAML records and
//! returns either the typed, normalized records (defaults applied) or the
//! complete list of field-level violations found across the whole array.
//!
//! # Design
//!
//! - **No short-circuiting.** Every record and every field is checked, so
//!   all violations in a file are discoverable in one validation pass. A
//!   record only materializes as a typed value when none of its fields
//!   produced a violation.
//! - **Field paths.** Each [`Violation`] names the offending field as
//!   `records[i].field`, so a report line points directly at the YAML
//!   entry to fix.
//! - **Normalization.** Defaults are applied here: `enabled` becomes `true`
//!   when absent, optional strings become `None`.
//! - **Format checks.** URL fields must parse as well-formed absolute URLs
//!   and the `env` field must be one of the closed [`Environment`]
//!   enumeration's canonical values; anything else is a violation, not an
//!   error.
//!
//! The checks here are purely structural. Uniqueness and foreign-key rules
//! span records and files, and live in [`crate::validator`].

use std::fmt;

use serde_yaml::Value;
use url::Url;

use crate::model::{Category, Environment, Link, Project, ProjectEnv};

/// A single field-level schema violation.
///
/// `path` names the offending field (`records[3].url`); `message` says what
/// was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `records[3].url`.
    pub path: String,
    /// What was wrong with the value.
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check an array of raw category records.
///
/// Returns the typed records when every element conforms, or every
/// violation found across the array.
pub fn check_categories(records: &[Value]) -> Result<Vec<Category>, Vec<Violation>> {
    let mut violations = Vec::new();
    let mut out = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let path = format!("records[{i}]");
        if !expect_mapping(record, &path, &mut violations) {
            continue;
        }

        let id = require_string(record, &path, "id", &mut violations);
        let name = require_string(record, &path, "name", &mut violations);
        let description = optional_string(record, &path, "description", &mut violations);
        let icon = optional_string(record, &path, "icon", &mut violations);
        let order = optional_order(record, &path, "order", &mut violations);

        if let (Some(id), Some(name), Some(description), Some(icon), Some(order)) =
            (id, name, description, icon, order)
        {
            out.push(Category {
                id,
                name,
                description,
                icon,
                order,
            });
        }
    }

    if violations.is_empty() { Ok(out) } else { Err(violations) }
}

/// Check an array of raw project records.
pub fn check_projects(records: &[Value]) -> Result<Vec<Project>, Vec<Violation>> {
    let mut violations = Vec::new();
    let mut out = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let path = format!("records[{i}]");
        if !expect_mapping(record, &path, &mut violations) {
            continue;
        }

        let id = require_string(record, &path, "id", &mut violations);
        let name = require_string(record, &path, "name", &mut violations);
        let category_id = require_string(record, &path, "categoryId", &mut violations);
        let description = optional_string(record, &path, "description", &mut violations);
        let icon = optional_string(record, &path, "icon", &mut violations);
        let order = optional_order(record, &path, "order", &mut violations);

        if let (Some(id), Some(name), Some(category_id), Some(description), Some(icon), Some(order)) =
            (id, name, category_id, description, icon, order)
        {
            out.push(Project {
                id,
                name,
                category_id,
                description,
                icon,
                order,
            });
        }
    }

    if violations.is_empty() { Ok(out) } else { Err(violations) }
}

/// Check an array of raw project-environment records.
pub fn check_project_envs(records: &[Value]) -> Result<Vec<ProjectEnv>, Vec<Violation>> {
    let mut violations = Vec::new();
    let mut out = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let path = format!("records[{i}]");
        if !expect_mapping(record, &path, &mut violations) {
            continue;
        }

        let project_id = require_string(record, &path, "projectId", &mut violations);
        let env = require_env(record, &path, "env", &mut violations);
        let url = require_url(record, &path, "url", &mut violations);
        let description = optional_string(record, &path, "description", &mut violations);
        let enabled = optional_enabled(record, &path, "enabled", &mut violations);

        if let (Some(project_id), Some(env), Some(url), Some(description), Some(enabled)) =
            (project_id, env, url, description, enabled)
        {
            out.push(ProjectEnv {
                project_id,
                env,
                url,
                description,
                enabled,
            });
        }
    }

    if violations.is_empty() { Ok(out) } else { Err(violations) }
}

/// Check an array of raw link records.
pub fn check_links(records: &[Value]) -> Result<Vec<Link>, Vec<Violation>> {
    let mut violations = Vec::new();
    let mut out = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let path = format!("records[{i}]");
        if !expect_mapping(record, &path, &mut violations) {
            continue;
        }

        let id = require_string(record, &path, "id", &mut violations);
        let name = require_string(record, &path, "name", &mut violations);
        let url = require_url(record, &path, "url", &mut violations);
        let category_id = optional_string(record, &path, "categoryId", &mut violations);
        let description = optional_string(record, &path, "description", &mut violations);
        let icon = optional_string(record, &path, "icon", &mut violations);
        let order = optional_order(record, &path, "order", &mut violations);
        let enabled = optional_enabled(record, &path, "enabled", &mut violations);

        if let (
            Some(id),
            Some(name),
            Some(url),
            Some(category_id),
            Some(description),
            Some(icon),
            Some(order),
            Some(enabled),
        ) = (id, name, url, category_id, description, icon, order, enabled)
        {
            out.push(Link {
                id,
                name,
                url,
                category_id,
                description,
                icon,
                order,
                enabled,
            });
        }
    }

    if violations.is_empty() { Ok(out) } else { Err(violations) }
}

/// Human-readable kind of a YAML node, for shape diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn expect_mapping(record: &Value, path: &str, out: &mut Vec<Violation>) -> bool {
    if record.is_mapping() {
        true
    } else {
        out.push(Violation::new(
            path,
            format!("expected a mapping, found {}", value_kind(record)),
        ));
        false
    }
}

/// A field that is treated as absent when missing or explicitly null.
fn field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    match record.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn require_string(
    record: &Value,
    path: &str,
    name: &str,
    out: &mut Vec<Violation>,
) -> Option<String> {
    let field_path = format!("{path}.{name}");
    match field(record, name) {
        None => {
            out.push(Violation::new(field_path, "missing required field"));
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            out.push(Violation::new(field_path, "must be a non-empty string"));
            None
        }
        Some(other) => {
            out.push(Violation::new(
                field_path,
                format!("must be a string, found {}", value_kind(other)),
            ));
            None
        }
    }
}

/// Returns `Some(None)` when the field is absent; `None` marks a violation.
fn optional_string(
    record: &Value,
    path: &str,
    name: &str,
    out: &mut Vec<Violation>,
) -> Option<Option<String>> {
    match field(record, name) {
        None => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(other) => {
            out.push(Violation::new(
                format!("{path}.{name}"),
                format!("must be a string, found {}", value_kind(other)),
            ));
            None
        }
    }
}

fn optional_order(
    record: &Value,
    path: &str,
    name: &str,
    out: &mut Vec<Violation>,
) -> Option<Option<u32>> {
    match field(record, name) {
        None => Some(None),
        Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(n) => Some(Some(n)),
            None => {
                out.push(Violation::new(
                    format!("{path}.{name}"),
                    format!("must be a non-negative integer, found {}", value_kind(value)),
                ));
                None
            }
        },
    }
}

fn optional_enabled(
    record: &Value,
    path: &str,
    name: &str,
    out: &mut Vec<Violation>,
) -> Option<bool> {
    match field(record, name) {
        None => Some(true),
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            out.push(Violation::new(
                format!("{path}.{name}"),
                format!("must be a boolean, found {}", value_kind(other)),
            ));
            None
        }
    }
}

fn require_url(record: &Value, path: &str, name: &str, out: &mut Vec<Violation>) -> Option<String> {
    let raw = require_string(record, path, name, out)?;
    match Url::parse(&raw) {
        Ok(_) => Some(raw),
        Err(e) => {
            out.push(Violation::new(
                format!("{path}.{name}"),
                format!("'{raw}' is not a well-formed absolute URL: {e}"),
            ));
            None
        }
    }
}

fn require_env(
    record: &Value,
    path: &str,
    name: &str,
    out: &mut Vec<Violation>,
) -> Option<Environment> {
    let raw = require_string(record, path, name, out)?;
    match raw.parse::<Environment>() {
        Ok(env) => Some(env),
        Err(message) => {
            out.push(Violation::new(format!("{path}.{name}"), message));
            None
        }
    }
}
