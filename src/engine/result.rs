//! Result types for searches

use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use crate::catalog::{AttributeValue, Color, Item, Size};

/// Number of matched items holding one attribute value.
///
/// Serializes with the attribute label as the value key, so a size count is
/// `{"size": .., "count": n}` and a color count is `{"color": .., "count": n}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount<V> {
    pub value: V,
    pub count: usize,
}

impl<V: AttributeValue + Serialize> Serialize for FacetCount<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FacetCount", 2)?;
        state.serialize_field(V::ATTRIBUTE, &self.value)?;
        state.serialize_field("count", &self.count)?;
        state.end()
    }
}

pub type SizeCount = FacetCount<Size>;
pub type ColorCount = FacetCount<Color>;

/// Result of one search, borrowing items from the engine
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchResults<'a> {
    /// Union match set, each item once, in collection order
    pub items: Vec<&'a Item>,
    /// One entry per registered size, in registry order
    pub size_counts: Vec<SizeCount>,
    /// One entry per registered color, in registry order
    pub color_counts: Vec<ColorCount>,
}

impl<'a> SearchResults<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reported count for `size`, `None` if the size is not registered
    pub fn size_count(&self, size: &Size) -> Option<usize> {
        find_count(&self.size_counts, size)
    }

    /// Reported count for `color`, `None` if the color is not registered
    pub fn color_count(&self, color: &Color) -> Option<usize> {
        find_count(&self.color_counts, color)
    }

    pub fn item_ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|item| item.id()).collect()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }
}

fn find_count<V: AttributeValue>(counts: &[FacetCount<V>], value: &V) -> Option<usize> {
    counts.iter().find(|c| &c.value == value).map(|c| c.count)
}
