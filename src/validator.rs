//! Schema and cross-entity integrity validation.
//!
//! The validator orchestrates the per-entity schema checks from
//! [`crate::schema`] and layers the relational rules on top: uniqueness of
//! primary keys, uniqueness of project names, composite uniqueness of
//! `(projectId, env)`, and foreign-key existence across files.
//!
//! # Reporting rules
//!
//! - **Accumulate everything.** Checks run in a fixed order and never stop
//!   at the first problem; the final [`ValidationReport`] carries every
//!   error string in the order the checks ran.
//! - **No cascading noise.** Integrity checks for an entity type are
//!   skipped when that type's schema check already failed, and the
//!   cross-file project-to-category check only runs when both sides
//!   parsed.
//! - **Distinct offenders.** A bad reference used many times is reported
//!   once, never once per occurrence.
//! - **Never throws on data.** Any data problem lands in the report;
//!   only infrastructure failures (handled upstream in the loader) abort
//!   a run.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::schema;

/// Aggregated outcome of one validation run.
///
/// `errors` concatenates every violation in check order; the per-file
/// flags let the CLI print pass/fail status per data file. Serialized
/// as-is for `navgen validate --format json`.
///
/// No partial validity notion exists: a single error anywhere makes the
/// whole report invalid.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Overall status - true only when `errors` is empty.
    pub valid: bool,
    /// Whether `categories.yaml` passed its schema and uniqueness checks.
    pub categories_valid: bool,
    /// Whether `projects.yaml` passed its schema and uniqueness checks.
    pub projects_valid: bool,
    /// Whether `project-envs.yaml` passed schema, foreign-key, and
    /// composite-uniqueness checks.
    pub project_envs_valid: bool,
    /// Whether `links.yaml` passed schema, uniqueness, and foreign-key checks.
    pub links_valid: bool,
    /// Whether every project's `categoryId` references an existing category.
    pub cross_references_valid: bool,
    /// Every error found, in the order the checks ran.
    pub errors: Vec<String>,
}

/// Validate all four record collections and report every violation.
///
/// Check order (fixed; errors accumulate across all steps):
/// 1. Category schema, then category id uniqueness
/// 2. Project schema, then project id uniqueness and project name
///    uniqueness (independent checks)
/// 3. Project-env schema, then `projectId` existence, then
///    `(projectId, env)` composite uniqueness
/// 4. Link schema, then link id uniqueness, then `categoryId` existence
/// 5. Cross-file: every project's `categoryId` must name a loaded
///    category - run here by the orchestrator because it needs both
///    loaded sets at once
#[must_use]
pub fn validate(
    categories: &[Value],
    projects: &[Value],
    project_envs: &[Value],
    links: &[Value],
) -> ValidationReport {
    let mut errors = Vec::new();

    // 1. Categories: schema, then id uniqueness.
    let error_mark = errors.len();
    let categories = match schema::check_categories(categories) {
        Ok(categories) => {
            for id in duplicates(categories.iter().map(|c| c.id.as_str())) {
                errors.push(format!("categories: duplicate id '{id}'"));
            }
            Some(categories)
        }
        Err(violations) => {
            errors.extend(violations.iter().map(|v| format!("categories: {v}")));
            None
        }
    };
    let categories_valid = errors.len() == error_mark;

    // 2. Projects: schema, then id and name uniqueness (independent checks).
    let error_mark = errors.len();
    let projects = match schema::check_projects(projects) {
        Ok(projects) => {
            for id in duplicates(projects.iter().map(|p| p.id.as_str())) {
                errors.push(format!("projects: duplicate id '{id}'"));
            }
            for name in duplicates(projects.iter().map(|p| p.name.as_str())) {
                errors.push(format!("projects: duplicate name '{name}'"));
            }
            Some(projects)
        }
        Err(violations) => {
            errors.extend(violations.iter().map(|v| format!("projects: {v}")));
            None
        }
    };
    let projects_valid = errors.len() == error_mark;

    // 3. Project envs: schema, then projectId existence, then composite
    //    (projectId, env) uniqueness. The foreign-key check needs typed
    //    projects, so it is skipped when the project schema failed.
    let error_mark = errors.len();
    match schema::check_project_envs(project_envs) {
        Ok(envs) => {
            if let Some(projects) = &projects {
                let known: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
                for id in distinct(
                    envs.iter()
                        .map(|e| e.project_id.as_str())
                        .filter(|id| !known.contains(id)),
                ) {
                    errors.push(format!("project-envs: unknown projectId '{id}'"));
                }
            }
            let keys: Vec<String> =
                envs.iter().map(|e| format!("{}-{}", e.project_id, e.env)).collect();
            for key in duplicates(keys.iter().map(String::as_str)) {
                errors.push(format!("project-envs: duplicate projectId/env pair '{key}'"));
            }
        }
        Err(violations) => {
            errors.extend(violations.iter().map(|v| format!("project-envs: {v}")));
        }
    }
    let project_envs_valid = errors.len() == error_mark;

    // 4. Links: schema, then id uniqueness, then categoryId existence for
    //    links that carry one.
    let error_mark = errors.len();
    match schema::check_links(links) {
        Ok(links) => {
            for id in duplicates(links.iter().map(|l| l.id.as_str())) {
                errors.push(format!("links: duplicate id '{id}'"));
            }
            if let Some(categories) = &categories {
                let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
                for id in distinct(
                    links
                        .iter()
                        .filter_map(|l| l.category_id.as_deref())
                        .filter(|id| !known.contains(id)),
                ) {
                    errors.push(format!("links: unknown categoryId '{id}'"));
                }
            }
        }
        Err(violations) => {
            errors.extend(violations.iter().map(|v| format!("links: {v}")));
        }
    }
    let links_valid = errors.len() == error_mark;

    // 5. Cross-file: project categoryId -> category id, only when both
    //    files parsed.
    let error_mark = errors.len();
    if let (Some(categories), Some(projects)) = (&categories, &projects) {
        let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        for id in distinct(
            projects
                .iter()
                .map(|p| p.category_id.as_str())
                .filter(|id| !known.contains(id)),
        ) {
            errors.push(format!("projects: unknown categoryId '{id}'"));
        }
    }
    let cross_references_valid = errors.len() == error_mark;

    debug!(errors = errors.len(), "validation finished");

    ValidationReport {
        valid: errors.is_empty(),
        categories_valid,
        projects_valid,
        project_envs_valid,
        links_valid,
        cross_references_valid,
        errors,
    }
}

/// Distinct values that occur more than once, in first-repeat order.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if !seen.insert(value) && reported.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Distinct values in first-occurrence order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}
