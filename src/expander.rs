//! Expansion of projects and environments into navigation items.
//!
//! The expander computes the filtered cross join of projects and
//! project-environment records: one [`NavigationItem`] per `(project, env)`
//! pair whose `projectId` matches. It denormalizes the project fields onto
//! each item so the rendering layer never has to join anything again.
//!
//! Output order is insertion order - project iteration order crossed with
//! environment match order. No sorting happens here; display ordering is
//! the aggregator's job. The item's `order` field is the environment's
//! fixed sort weight (prod=1, staging=2, test=3), not either entity's own
//! `order` field.
//!
//! The expander assumes integrity-valid input and is total over it: a
//! project with zero environments simply contributes zero items.

use tracing::debug;

use crate::model::{NavigationItem, Project, ProjectEnv};

/// Expand every matching (project, environment) pair into a navigation item.
///
/// For each project in input order, every env record whose `projectId`
/// equals the project's id yields one item with:
/// - `id` = `"<projectId>-<env>"` (unique whenever the composite keys are)
/// - project name/description/icon and `categoryId` copied from the project
/// - `env`, `url`, `description` (as `envDescription`), `enabled` copied
///   from the env record
/// - `order` = the environment's sort weight
#[must_use]
pub fn expand(projects: &[Project], project_envs: &[ProjectEnv]) -> Vec<NavigationItem> {
    let mut items = Vec::new();

    for project in projects {
        for env_record in project_envs.iter().filter(|e| e.project_id == project.id) {
            items.push(NavigationItem {
                id: format!("{}-{}", project.id, env_record.env),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                project_description: project.description.clone(),
                category_id: project.category_id.clone(),
                env: env_record.env,
                url: env_record.url.clone(),
                env_description: env_record.description.clone(),
                icon: project.icon.clone(),
                enabled: env_record.enabled,
                order: env_record.env.sort_weight(),
            });
        }
    }

    debug!(
        projects = projects.len(),
        envs = project_envs.len(),
        items = items.len(),
        "expanded navigation items"
    );
    items
}
