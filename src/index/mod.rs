//! Attribute indexes
//!
//! Indexes are built once from the full item collection and never change
//! afterwards.
//!
//! # Invariants
//!
//! - Every item appears in exactly one bucket per attribute
//! - Buckets preserve collection order
//! - Values without items have no bucket; lookups for them return `&[]`

mod attribute;
mod errors;

pub use attribute::{AttributeIndex, ItemSlot};
pub use errors::{IndexError, IndexErrorCode, IndexResult, Severity};
