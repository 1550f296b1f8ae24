//! facetsearch - An immutable, in-memory faceted search engine
//!
//! Items are indexed once by size and by color. Searches union the selected
//! values across both attributes and report a count for every registered
//! value.
//!
//! ```
//! use facetsearch::catalog::{Color, Item, Size};
//! use facetsearch::engine::{SearchEngine, SearchOptions};
//! use uuid::Uuid;
//!
//! let items = vec![
//!     Item::new(Uuid::new_v4(), "Red - Small", Size::small(), Color::red()),
//!     Item::new(Uuid::new_v4(), "Blue - Large", Size::large(), Color::blue()),
//! ];
//! let engine = SearchEngine::new(items, Size::all(), Color::all()).unwrap();
//!
//! let results = engine.search(&SearchOptions::new().with_color(Color::red())).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results.color_count(&Color::red()), Some(1));
//! ```

pub mod catalog;
pub mod engine;
pub mod index;
pub mod observability;
