//! Attribute value types
//!
//! Each filterable attribute has a closed set of values. A value is identified
//! by a stable `Uuid` key; the display name never takes part in equality.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::registry::AttributeRegistry;

/// Behavior shared by every categorical attribute value.
pub trait AttributeValue: Clone + Eq + Hash + fmt::Debug + Send + Sync {
    /// Attribute label used in logs and errors ("size", "color")
    const ATTRIBUTE: &'static str;

    /// Stable identity key
    fn id(&self) -> Uuid;

    /// Display name
    fn name(&self) -> &str;
}

const SMALL_ID: Uuid = Uuid::from_u128(0x8a0b_2c17_4b1e_4d5c_9f3a_0c1e_5a7d_0001);
const MEDIUM_ID: Uuid = Uuid::from_u128(0x8a0b_2c17_4b1e_4d5c_9f3a_0c1e_5a7d_0002);
const LARGE_ID: Uuid = Uuid::from_u128(0x8a0b_2c17_4b1e_4d5c_9f3a_0c1e_5a7d_0003);

const RED_ID: Uuid = Uuid::from_u128(0x3f6e_91d2_07a4_4c88_b2e5_6d90_1c4b_0001);
const BLUE_ID: Uuid = Uuid::from_u128(0x3f6e_91d2_07a4_4c88_b2e5_6d90_1c4b_0002);
const YELLOW_ID: Uuid = Uuid::from_u128(0x3f6e_91d2_07a4_4c88_b2e5_6d90_1c4b_0003);
const WHITE_ID: Uuid = Uuid::from_u128(0x3f6e_91d2_07a4_4c88_b2e5_6d90_1c4b_0004);
const BLACK_ID: Uuid = Uuid::from_u128(0x3f6e_91d2_07a4_4c88_b2e5_6d90_1c4b_0005);

/// A size value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    id: Uuid,
    name: String,
}

impl Size {
    /// Creates a size with an explicit key
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn small() -> Self {
        Self::new(SMALL_ID, "Small")
    }

    pub fn medium() -> Self {
        Self::new(MEDIUM_ID, "Medium")
    }

    pub fn large() -> Self {
        Self::new(LARGE_ID, "Large")
    }

    /// The standard size registry: Small, Medium, Large.
    pub fn all() -> AttributeRegistry<Size> {
        AttributeRegistry::from_known(vec![Self::small(), Self::medium(), Self::large()])
    }
}

impl AttributeValue for Size {
    const ATTRIBUTE: &'static str = "size";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Size {}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A color value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    id: Uuid,
    name: String,
}

impl Color {
    /// Creates a color with an explicit key
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn red() -> Self {
        Self::new(RED_ID, "Red")
    }

    pub fn blue() -> Self {
        Self::new(BLUE_ID, "Blue")
    }

    pub fn yellow() -> Self {
        Self::new(YELLOW_ID, "Yellow")
    }

    pub fn white() -> Self {
        Self::new(WHITE_ID, "White")
    }

    pub fn black() -> Self {
        Self::new(BLACK_ID, "Black")
    }

    /// The standard color registry: Red, Blue, Yellow, White, Black.
    pub fn all() -> AttributeRegistry<Color> {
        AttributeRegistry::from_known(vec![
            Self::red(),
            Self::blue(),
            Self::yellow(),
            Self::white(),
            Self::black(),
        ])
    }
}

impl AttributeValue for Color {
    const ATTRIBUTE: &'static str = "color";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
