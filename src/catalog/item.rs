//! Catalog items

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attribute::{Color, Size};

/// A catalog entry. Identity is `id`; items are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: Uuid,
    name: String,
    size: Size,
    color: Color,
}

impl Item {
    /// Creates a new item
    pub fn new(id: Uuid, name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            color,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> &Size {
        &self.size
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}
