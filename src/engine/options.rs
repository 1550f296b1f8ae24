//! Search options

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Color, Size};

/// Selected sizes and colors. Both are sets; either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub sizes: HashSet<Size>,
    #[serde(default)]
    pub colors: HashSet<Color>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.sizes.insert(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.insert(color);
        self
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors.extend(colors);
        self
    }

    /// True when nothing is selected on either axis
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty() && self.colors.is_empty()
    }
}
