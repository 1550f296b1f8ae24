//! Search engine
//!
//! Owns the item collection, both registries and both attribute indexes.
//!
//! # Search semantics
//!
//! - An item matches if it holds any selected size OR any selected color
//! - The match set holds each item once
//! - Facet counts cover every registered value, in registry order
//! - Values that were not selected report 0
//!
//! # Invariants
//!
//! - Indexes are complete before the engine is returned
//! - A search is read-only; the same query gives the same answer
//! - A search returns a complete result or a single error, never a partial one

mod config;
mod engine;
mod errors;
mod facets;
mod options;
mod result;

pub use config::{ConfigError, EngineConfig};
pub use engine::SearchEngine;
pub use errors::{AxisFault, AxisStatus, SearchError, SearchResult};
pub use facets::count_facets;
pub use options::SearchOptions;
pub use result::{ColorCount, FacetCount, SearchResults, SizeCount};
