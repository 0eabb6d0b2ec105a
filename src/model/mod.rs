//! Typed entity records and the environment enumeration.
//!
//! This module defines the relational data model the pipeline operates on.
//! Source records ([`Category`], [`Project`], [`ProjectEnv`], [`Link`]) are
//! loaded fresh at the start of a run and held as read-only sequences;
//! [`NavigationItem`] and [`CategoryBlock`] are derived from them and only
//! exist in the emitted snapshot.
//!
//! All records serialize with camelCase field names (`categoryId`,
//! `projectId`), matching both the YAML source files and the JSON snapshot
//! contract the rendering layer depends on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_CATEGORY_ORDER;

/// The closed set of environment kinds a project URL can belong to.
///
/// The canonical serialized values are the lowercase strings `prod`,
/// `staging`, and `test`; any other spelling is a schema violation. The
/// enumeration carries every piece of per-kind metadata (sort weight,
/// display label, badge color) as exhaustive `match`-based methods, so a
/// new variant cannot be added without the compiler pointing at every
/// lookup site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production - surfaced first in every category.
    Prod,
    /// Staging / pre-release.
    Staging,
    /// Test.
    Test,
}

impl Environment {
    /// All environment kinds, in display-priority order.
    pub const ALL: [Self; 3] = [Self::Prod, Self::Staging, Self::Test];

    /// Fixed display sort weight; lower sorts first.
    ///
    /// Production entries are surfaced ahead of staging, ahead of test,
    /// regardless of declaration order in the source files.
    #[must_use]
    pub const fn sort_weight(self) -> u32 {
        match self {
            Self::Prod => 1,
            Self::Staging => 2,
            Self::Test => 3,
        }
    }

    /// Human-readable label for the rendered badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prod => "Production",
            Self::Staging => "Staging",
            Self::Test => "Test",
        }
    }

    /// Badge color used by the rendering layer.
    #[must_use]
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Prod => "#16a34a",
            Self::Staging => "#d97706",
            Self::Test => "#64748b",
        }
    }

    /// The canonical lowercase wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Staging => "staging",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(Self::Prod),
            "staging" => Ok(Self::Staging),
            "test" => Ok(Self::Test),
            other => Err(format!(
                "unknown environment '{other}' (expected one of: prod, staging, test)"
            )),
        }
    }
}

/// A named grouping bucket for navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique primary key.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display position among categories; absent sorts last (999).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Category {
    /// Effective sort position, with the 999 sentinel for absent `order`.
    #[must_use]
    pub fn sort_order(&self) -> u32 {
        self.order.unwrap_or(DEFAULT_CATEGORY_ORDER)
    }
}

/// A logical service/application that may expose several environment URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique primary key.
    pub id: String,
    /// Display name; must be unique across all projects.
    pub name: String,
    /// Foreign key into [`Category::id`].
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// The binding of one project to one environment kind and its URL.
///
/// The pair `(project_id, env)` is unique across the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEnv {
    /// Foreign key into [`Project::id`].
    pub project_id: String,
    /// Which environment this URL serves.
    pub env: Environment,
    /// Absolute URL of the deployment.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled entries are dropped entirely at aggregation.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// A standalone link, independent of the project/environment model.
///
/// Links are loaded and validated but never expanded into navigation
/// items; they exist in the source data for a rendering path outside this
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Unique primary key.
    pub id: String,
    pub name: String,
    /// Absolute URL of the target.
    pub url: String,
    /// Optional foreign key into [`Category::id`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// A derived, flattened (project, environment) entry ready for display.
///
/// `id` is the combination key `"<projectId>-<env>"`, unique by
/// construction because `(projectId, env)` pairs are unique upstream.
/// `order` is the **environment's** sort weight - distinct from the
/// similarly named `order` fields on [`Category`] and [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    /// Combination key `"<projectId>-<env>"`.
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    pub category_id: String,
    pub env: Environment,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub enabled: bool,
    /// Environment sort weight (prod=1, staging=2, test=3).
    pub order: u32,
}

/// The final per-category aggregation of enabled, sorted navigation items.
///
/// Never constructed with an empty `items` sequence; empty categories are
/// dropped by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBlock {
    pub category: Category,
    pub items: Vec<NavigationItem>,
}

/// The persisted snapshot document: `{ "categoryBlocks": [...] }`.
///
/// Field names and nesting are the contract the rendering layer depends
/// on; they must match the serialized record shapes verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub category_blocks: Vec<CategoryBlock>,
}

/// `enabled` defaults to true when absent from a source record.
pub(crate) const fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_weights_order_prod_before_staging_before_test() {
        assert!(Environment::Prod.sort_weight() < Environment::Staging.sort_weight());
        assert!(Environment::Staging.sort_weight() < Environment::Test.sort_weight());
    }

    #[test]
    fn environment_round_trips_through_canonical_lowercase() {
        for env in Environment::ALL {
            let yaml = serde_yaml::to_string(&env).unwrap();
            assert_eq!(yaml.trim(), env.as_str());
            let back: Environment = serde_yaml::from_str(env.as_str()).unwrap();
            assert_eq!(back, env);
        }
    }

    #[test]
    fn environment_rejects_non_canonical_casing() {
        assert!(serde_yaml::from_str::<Environment>("PROD").is_err());
        assert!(serde_yaml::from_str::<Environment>("Production").is_err());
        assert!("PROD".parse::<Environment>().is_err());
    }

    #[test]
    fn project_env_enabled_defaults_to_true() {
        let env: ProjectEnv = serde_yaml::from_str(
            "projectId: svc\nenv: prod\nurl: https://prod.example.com\n",
        )
        .unwrap();
        assert!(env.enabled);
        assert_eq!(env.env, Environment::Prod);
    }

    #[test]
    fn category_sort_order_falls_back_to_sentinel() {
        let with_order: Category =
            serde_yaml::from_str("id: infra\nname: Infrastructure\norder: 1\n").unwrap();
        let without: Category = serde_yaml::from_str("id: misc\nname: Misc\n").unwrap();
        assert_eq!(with_order.sort_order(), 1);
        assert_eq!(without.sort_order(), DEFAULT_CATEGORY_ORDER);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_contract_fields() {
        let snapshot = NavigationSnapshot {
            category_blocks: vec![CategoryBlock {
                category: Category {
                    id: "infra".into(),
                    name: "Infrastructure".into(),
                    description: None,
                    icon: None,
                    order: Some(1),
                },
                items: vec![NavigationItem {
                    id: "svc-prod".into(),
                    project_id: "svc".into(),
                    project_name: "Service".into(),
                    project_description: None,
                    category_id: "infra".into(),
                    env: Environment::Prod,
                    url: "https://prod.example.com".into(),
                    env_description: None,
                    icon: None,
                    enabled: true,
                    order: 1,
                }],
            }],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"categoryBlocks\""));
        assert!(json.contains("\"projectName\""));
        assert!(json.contains("\"categoryId\""));
        assert!(json.contains("\"env\":\"prod\""));
        // Absent optionals stay out of the snapshot entirely.
        assert!(!json.contains("projectDescription"));
    }
}
