//! Index error types
//!
//! Error codes:
//! - FACET_DUPLICATE_ITEM (FATAL)
//! - FACET_UNREGISTERED_VALUE (FATAL)
//!
//! Both are construction faults: the engine refuses to come up.

use std::fmt;

use uuid::Uuid;

/// Severity levels for index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// No usable engine exists
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Index-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    /// Two items share an identifier
    FacetDuplicateItem,
    /// An item carries a value missing from its attribute registry
    FacetUnregisteredValue,
}

impl IndexErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IndexErrorCode::FacetDuplicateItem => "FACET_DUPLICATE_ITEM",
            IndexErrorCode::FacetUnregisteredValue => "FACET_UNREGISTERED_VALUE",
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Index error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexError {
    code: IndexErrorCode,
    message: String,
    /// Offending item, when one can be named
    item: Option<Uuid>,
}

impl IndexError {
    /// Create a duplicate item error
    pub fn duplicate_item(item: Uuid) -> Self {
        Self {
            code: IndexErrorCode::FacetDuplicateItem,
            message: format!("Item {} appears more than once in the collection", item),
            item: Some(item),
        }
    }

    /// Create an unregistered value error
    pub fn unregistered_value(item: Uuid, attribute: &str, value: &str) -> Self {
        Self {
            code: IndexErrorCode::FacetUnregisteredValue,
            message: format!(
                "Item {} has {} '{}' which is not in the {} registry",
                item, attribute, value, attribute
            ),
            item: Some(item),
        }
    }

    pub fn code(&self) -> IndexErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending item if applicable
    pub fn item(&self) -> Option<Uuid> {
        self.item
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for IndexError {}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;
