//! Single-attribute index
//!
//! Buckets hold item slots (positions in the engine-owned collection), kept in
//! collection order. A value with no items has no bucket at all.

use std::collections::HashMap;
use std::marker::PhantomData;

use uuid::Uuid;

use crate::catalog::{AttributeRegistry, AttributeValue, Item};

use super::errors::{IndexError, IndexResult};

/// Position of an item in the engine-owned collection
pub type ItemSlot = usize;

/// Maps each value of one attribute to the items holding it.
#[derive(Debug, Clone)]
pub struct AttributeIndex<V: AttributeValue> {
    buckets: HashMap<Uuid, Vec<ItemSlot>>,
    slot_count: usize,
    _value: PhantomData<fn() -> V>,
}

impl<V: AttributeValue> AttributeIndex<V> {
    /// Partitions `items` by the value `selector` picks. O(n).
    pub fn build<F>(items: &[Item], selector: F) -> Self
    where
        F: Fn(&Item) -> &V,
    {
        let mut buckets: HashMap<Uuid, Vec<ItemSlot>> = HashMap::new();
        for (slot, item) in items.iter().enumerate() {
            buckets.entry(selector(item).id()).or_default().push(slot);
        }

        Self {
            buckets,
            slot_count: items.len(),
            _value: PhantomData,
        }
    }

    /// Like `build`, but refuses items whose value is not registered.
    pub fn build_checked<F>(
        items: &[Item],
        registry: &AttributeRegistry<V>,
        selector: F,
    ) -> IndexResult<Self>
    where
        F: Fn(&Item) -> &V,
    {
        for item in items {
            let value = selector(item);
            if !registry.contains(value) {
                return Err(IndexError::unregistered_value(
                    item.id(),
                    V::ATTRIBUTE,
                    value.name(),
                ));
            }
        }

        Ok(Self::build(items, selector))
    }

    /// Bucket for `value`; empty when no item holds it.
    pub fn lookup(&self, value: &V) -> &[ItemSlot] {
        self.lookup_key(value.id())
    }

    /// Bucket for a raw key
    pub fn lookup_key(&self, key: Uuid) -> &[ItemSlot] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attribute label
    pub fn attribute(&self) -> &'static str {
        V::ATTRIBUTE
    }

    /// Returns the number of non-empty buckets
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of slots across all buckets
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Color, Size};

    fn item(size: Size, color: Color) -> Item {
        Item::new(Uuid::new_v4(), format!("{} - {}", color, size), size, color)
    }

    fn sample() -> Vec<Item> {
        vec![
            item(Size::small(), Color::red()),
            item(Size::medium(), Color::red()),
            item(Size::medium(), Color::black()),
            item(Size::medium(), Color::blue()),
            item(Size::large(), Color::blue()),
        ]
    }

    #[test]
    fn test_buckets_keep_collection_order() {
        let items = sample();
        let index = AttributeIndex::build(&items, Item::size);

        assert_eq!(index.lookup(&Size::medium()), &[1, 2, 3]);
        assert_eq!(index.lookup(&Size::small()), &[0]);
        assert_eq!(index.lookup(&Size::large()), &[4]);
    }

    #[test]
    fn test_every_item_in_exactly_one_bucket() {
        let items = sample();
        let index = AttributeIndex::build(&items, Item::color);

        let mut slots: Vec<ItemSlot> = Color::all()
            .iter()
            .flat_map(|c| index.lookup(c).iter().copied())
            .collect();
        slots.sort_unstable();

        assert_eq!(slots, vec![0, 1, 2, 3, 4]);
        assert_eq!(index.slot_count(), 5);
    }

    #[test]
    fn test_absent_value_has_no_bucket() {
        let items = sample();
        let index = AttributeIndex::build(&items, Item::color);

        assert!(index.lookup(&Color::yellow()).is_empty());
        assert!(index.lookup(&Color::white()).is_empty());
        assert_eq!(index.key_count(), 3);
    }

    #[test]
    fn test_empty_collection() {
        let index = AttributeIndex::build(&[], Item::size);
        assert_eq!(index.key_count(), 0);
        assert!(index.lookup(&Size::small()).is_empty());
    }

    #[test]
    fn test_build_checked_rejects_unregistered_value() {
        let mut items = sample();
        let stray = item(Size::small(), Color::new(Uuid::new_v4(), "Green"));
        let stray_id = stray.id();
        items.push(stray);

        let err = AttributeIndex::build_checked(&items, &Color::all(), Item::color).unwrap_err();
        assert_eq!(err.item(), Some(stray_id));
        assert!(err.message().contains("Green"));

        assert!(AttributeIndex::build_checked(&items, &Size::all(), Item::size).is_ok());
    }
}
