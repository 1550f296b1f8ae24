//! Catalog errors

use thiserror::Error;
use uuid::Uuid;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while assembling registries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Registry for attribute '{0}' has no values")]
    EmptyRegistry(&'static str),

    #[error("Registry for attribute '{attribute}' repeats key {id} (value '{name}')")]
    DuplicateKey {
        attribute: &'static str,
        name: String,
        id: Uuid,
    },
}
