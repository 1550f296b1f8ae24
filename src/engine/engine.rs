//! Faceted search engine
//!
//! Search flow:
//! 1. Collect the size axis and the color axis (concurrently)
//! 2. Fail as a whole if either axis failed
//! 3. Union both axes, de-duplicated, in collection order
//! 4. Count facets for sizes and colors (concurrently)

use std::collections::HashSet;

use uuid::Uuid;

use crate::catalog::{AttributeRegistry, AttributeValue, Color, Item, Size};
use crate::index::{AttributeIndex, IndexError, IndexResult, ItemSlot};
use crate::observability::{log_event, Event, ObservationScope, SearchMetrics};

use super::config::EngineConfig;
use super::errors::{AxisFault, SearchError, SearchResult};
use super::facets::count_facets;
use super::options::SearchOptions;
use super::result::SearchResults;

/// Slots selected on one axis
#[derive(Debug, Default)]
struct AxisMatches {
    slots: Vec<ItemSlot>,
    /// Selected values with an empty bucket
    misses: usize,
}

/// Immutable index over a fixed item collection.
///
/// Built once; every method takes `&self`, so one engine can serve searches
/// from many threads.
#[derive(Debug)]
pub struct SearchEngine {
    items: Vec<Item>,
    sizes: AttributeRegistry<Size>,
    colors: AttributeRegistry<Color>,
    size_index: AttributeIndex<Size>,
    color_index: AttributeIndex<Color>,
    config: EngineConfig,
    metrics: SearchMetrics,
}

impl SearchEngine {
    /// Builds an engine with the default configuration.
    pub fn new(
        items: Vec<Item>,
        sizes: AttributeRegistry<Size>,
        colors: AttributeRegistry<Color>,
    ) -> IndexResult<Self> {
        Self::with_config(items, sizes, colors, EngineConfig::default())
    }

    /// Builds both indexes.
    ///
    /// Fails with FACET_DUPLICATE_ITEM or FACET_UNREGISTERED_VALUE; no engine
    /// is produced in that case. Construction is logged only when
    /// `config.log_builds` is set.
    pub fn with_config(
        items: Vec<Item>,
        sizes: AttributeRegistry<Size>,
        colors: AttributeRegistry<Color>,
        config: EngineConfig,
    ) -> IndexResult<Self> {
        if !config.log_builds {
            return Self::build(items, sizes, colors, config);
        }

        let item_count = items.len().to_string();
        let scope = ObservationScope::with_fields("ENGINE_BUILD", &[("items", item_count.as_str())]);

        match Self::build(items, sizes, colors, config) {
            Ok(engine) => {
                let size_keys = engine.size_index.key_count().to_string();
                let color_keys = engine.color_index.key_count().to_string();
                scope.complete_with_fields(&[
                    ("size_keys", size_keys.as_str()),
                    ("color_keys", color_keys.as_str()),
                ]);
                Ok(engine)
            }
            Err(e) => {
                scope.fail_fatal(e.code().code(), e.message());
                Err(e)
            }
        }
    }

    fn build(
        items: Vec<Item>,
        sizes: AttributeRegistry<Size>,
        colors: AttributeRegistry<Color>,
        config: EngineConfig,
    ) -> IndexResult<Self> {
        let mut seen: HashSet<Uuid> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(IndexError::duplicate_item(item.id()));
            }
        }

        let size_index = AttributeIndex::build_checked(&items, &sizes, Item::size)?;
        let color_index = AttributeIndex::build_checked(&items, &colors, Item::color)?;

        Ok(Self {
            items,
            sizes,
            colors,
            size_index,
            color_index,
            config,
            metrics: SearchMetrics::new(),
        })
    }

    /// Runs one search.
    ///
    /// An item matches when it holds any selected size OR any selected color.
    /// Facet counts cover every registered value; unselected values report 0.
    pub fn search(&self, options: &SearchOptions) -> SearchResult<SearchResults<'_>> {
        report_unknown(&self.sizes, &options.sizes);
        report_unknown(&self.colors, &options.colors);

        let (by_size, by_color) = rayon::join(
            || self.collect_axis(&self.size_index, &options.sizes),
            || self.collect_axis(&self.color_index, &options.colors),
        );

        let (by_size, by_color) = match (by_size, by_color) {
            (Ok(size), Ok(color)) => (size, color),
            (size, color) => {
                let err = SearchError::axis_failed(size.err(), color.err());
                self.metrics.record_failure();
                let reason = err.to_string();
                log_event(Event::SearchFailed, &[("code", err.code()), ("reason", reason.as_str())]);
                return Err(err);
            }
        };
        self.metrics.add_lookup_misses(by_size.misses + by_color.misses);

        let matched: Vec<&Item> = union_slots(by_size.slots, by_color.slots)
            .into_iter()
            .map(|slot| &self.items[slot])
            .collect();

        let parallel = self.config.facets_in_parallel(matched.len());
        let (size_counts, color_counts) = rayon::join(
            || count_facets(&self.sizes, &options.sizes, &matched, Item::size, parallel),
            || count_facets(&self.colors, &options.colors, &matched, Item::color, parallel),
        );

        self.metrics.record_search(matched.len());
        if self.config.log_searches {
            let matched_count = matched.len().to_string();
            let sizes = options.sizes.len().to_string();
            let colors = options.colors.len().to_string();
            log_event(
                Event::SearchComplete,
                &[
                    ("matched", matched_count.as_str()),
                    ("sizes", sizes.as_str()),
                    ("colors", colors.as_str()),
                ],
            );
        }

        Ok(SearchResults {
            items: matched,
            size_counts,
            color_counts,
        })
    }

    /// Concatenates the buckets of every selected value, checking each slot.
    fn collect_axis<V: AttributeValue>(
        &self,
        index: &AttributeIndex<V>,
        selected: &HashSet<V>,
    ) -> Result<AxisMatches, AxisFault> {
        let mut matches = AxisMatches::default();

        for value in selected {
            let bucket = index.lookup(value);
            if bucket.is_empty() {
                matches.misses += 1;
                continue;
            }
            if let Some(&slot) = bucket.iter().find(|&&slot| slot >= self.items.len()) {
                return Err(AxisFault {
                    attribute: V::ATTRIBUTE,
                    value: value.name().to_string(),
                    slot,
                    len: self.items.len(),
                });
            }
            matches.slots.extend_from_slice(bucket);
        }

        Ok(matches)
    }

    /// Returns the number of indexed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sizes(&self) -> &AttributeRegistry<Size> {
        &self.sizes
    }

    pub fn colors(&self) -> &AttributeRegistry<Color> {
        &self.colors
    }

    pub fn size_index(&self) -> &AttributeIndex<Size> {
        &self.size_index
    }

    pub fn color_index(&self) -> &AttributeIndex<Color> {
        &self.color_index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }
}

/// Selected values outside the registry are not errors; they can only ever
/// contribute nothing. They are logged by display name.
fn report_unknown<V: AttributeValue>(registry: &AttributeRegistry<V>, selected: &HashSet<V>) {
    for value in selected.iter().filter(|v| !registry.contains(v)) {
        let id = value.id().to_string();
        log_event(
            Event::SearchUnknownValue,
            &[("attribute", V::ATTRIBUTE), ("value", value.name()), ("id", id.as_str())],
        );
    }
}

/// Set union of two slot lists, ascending.
///
/// Item ids are unique per engine, so slot identity is item identity.
fn union_slots(mut left: Vec<ItemSlot>, right: Vec<ItemSlot>) -> Vec<ItemSlot> {
    left.extend(right);
    left.sort_unstable();
    left.dedup();
    left
}
