//! Facet-count computation
//!
//! Every registered value gets exactly one entry, in registry order. Only
//! selected values are counted; unselected values report 0 even when matched
//! items hold them.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::catalog::{AttributeRegistry, AttributeValue, Item};

use super::result::FacetCount;

/// Counts matched items per registered value.
///
/// With `parallel` set, each value is evaluated on the rayon pool; the
/// collected output keeps registry order.
pub fn count_facets<V, F>(
    registry: &AttributeRegistry<V>,
    selected: &HashSet<V>,
    matched: &[&Item],
    selector: F,
    parallel: bool,
) -> Vec<FacetCount<V>>
where
    V: AttributeValue,
    F: Fn(&Item) -> &V + Sync,
{
    let count_one = |value: &V| FacetCount {
        value: value.clone(),
        count: if selected.contains(value) {
            matched.iter().filter(|&&item| selector(item) == value).count()
        } else {
            0
        },
    };

    if parallel {
        registry.as_slice().par_iter().map(count_one).collect()
    } else {
        registry.iter().map(count_one).collect()
    }
}
