//! Closed enumeration of the values of one attribute
//!
//! The registry is passed to the engine explicitly. Its order is the order in
//! which facet counts are reported.

use std::collections::HashSet;

use super::attribute::AttributeValue;
use super::errors::{CatalogError, CatalogResult};

/// Ordered, duplicate-free, non-empty set of attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRegistry<V: AttributeValue> {
    values: Vec<V>,
}

impl<V: AttributeValue> AttributeRegistry<V> {
    /// Creates a registry, rejecting empty input and duplicate keys.
    pub fn new(values: Vec<V>) -> CatalogResult<Self> {
        if values.is_empty() {
            return Err(CatalogError::EmptyRegistry(V::ATTRIBUTE));
        }

        let mut seen = HashSet::with_capacity(values.len());
        for value in &values {
            if !seen.insert(value.id()) {
                return Err(CatalogError::DuplicateKey {
                    attribute: V::ATTRIBUTE,
                    name: value.name().to_string(),
                    id: value.id(),
                });
            }
        }

        Ok(Self { values })
    }

    /// Built-in registries whose keys are distinct by construction
    pub(crate) fn from_known(values: Vec<V>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// Attribute label
    pub fn attribute(&self) -> &'static str {
        V::ATTRIBUTE
    }

    /// Returns true if the value's key is registered
    pub fn contains(&self, value: &V) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Finds a value by display name (exact match)
    pub fn find_by_name(&self, name: &str) -> Option<&V> {
        self.values.iter().find(|v| v.name() == name)
    }

    /// Values in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a, V: AttributeValue> IntoIterator for &'a AttributeRegistry<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Color, Size};
    use uuid::Uuid;

    #[test]
    fn test_standard_registry_order() {
        let colors = Color::all();
        let names: Vec<&str> = colors.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Red", "Blue", "Yellow", "White", "Black"]);

        let sizes = Size::all();
        let names: Vec<&str> = sizes.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Small", "Medium", "Large"]);
    }

    #[test]
    fn test_empty_registry_rejected() {
        let err = AttributeRegistry::<Size>::new(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::EmptyRegistry("size"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let id = Uuid::new_v4();
        let err = AttributeRegistry::new(vec![Size::new(id, "S"), Size::new(id, "Small")])
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateKey { attribute: "size", .. }));
        assert!(err.to_string().contains("Small"));
    }

    #[test]
    fn test_find_by_name_and_contains() {
        let sizes = Size::all();
        assert_eq!(sizes.find_by_name("Medium"), Some(&Size::medium()));
        assert_eq!(sizes.find_by_name("medium"), None);
        assert!(sizes.contains(&Size::large()));
        assert!(!sizes.contains(&Size::new(Uuid::new_v4(), "Huge")));
    }
}
