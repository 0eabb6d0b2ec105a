//! Aggregation of navigation items into ordered category blocks.
//!
//! The aggregator turns the flat item list into the snapshot's final
//! shape: one [`CategoryBlock`] per category that has at least one
//! qualifying item.
//!
//! Rules, in order:
//! 1. Per category, select items whose `categoryId` matches and whose
//!    `enabled` is true. Disabled items are dropped entirely, not
//!    deprioritized.
//! 2. Sort the selection by environment weight ascending (production
//!    first); ties break on project name ascending under a
//!    case-insensitive Unicode fold rather than raw codepoint order.
//! 3. Drop categories whose selection came up empty.
//! 4. Stable-sort the surviving blocks by the category's declared `order`
//!    (missing treated as 999); tied categories keep their input order.
//!
//! Items whose `categoryId` matches no loaded category are silently
//! dropped here. The build pipeline trusts `navgen validate` to have
//! flagged dangling references; feeding unvalidated data through simply
//! loses those items.

use std::cmp::Ordering;
use tracing::debug;

use crate::model::{Category, CategoryBlock, NavigationItem};

/// Group enabled navigation items into ordered category blocks.
#[must_use]
pub fn aggregate(categories: &[Category], items: &[NavigationItem]) -> Vec<CategoryBlock> {
    let mut blocks: Vec<CategoryBlock> = categories
        .iter()
        .filter_map(|category| {
            let mut selected: Vec<NavigationItem> = items
                .iter()
                .filter(|item| item.enabled && item.category_id == category.id)
                .cloned()
                .collect();
            if selected.is_empty() {
                return None;
            }
            selected.sort_by(|a, b| {
                a.order
                    .cmp(&b.order)
                    .then_with(|| folded_name_cmp(&a.project_name, &b.project_name))
            });
            Some(CategoryBlock {
                category: category.clone(),
                items: selected,
            })
        })
        .collect();

    // sort_by_key is stable: categories tied on order keep input order.
    blocks.sort_by_key(|block| block.category.sort_order());

    debug!(blocks = blocks.len(), "aggregated category blocks");
    blocks
}

/// Case-insensitive Unicode comparison for project names.
///
/// Folds both names through `char::to_lowercase` before comparing, with a
/// raw comparison as the final tiebreak so equal-folded names still order
/// deterministically. This keeps `"alpha"` ahead of `"Beta"`, which raw
/// codepoint order would reverse.
fn folded_name_cmp(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b)).then_with(|| a.cmp(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}
