//! Catalog value types
//!
//! Items and the closed sets of attribute values they are filtered by.
//! Registries are ordinary values handed to the engine; nothing here is
//! global state.

mod attribute;
mod errors;
mod item;
mod registry;

pub use attribute::{AttributeValue, Color, Size};
pub use errors::{CatalogError, CatalogResult};
pub use item::Item;
pub use registry::AttributeRegistry;
