//! Search error types
//!
//! A search either returns a complete result or fails as a whole. When an
//! axis fails, the error names the outcome of both axes.

use std::fmt;

use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Fault while resolving one axis' matches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{attribute} '{value}' bucket references slot {slot} but the collection holds {len} items")]
pub struct AxisFault {
    pub attribute: &'static str,
    pub value: String,
    pub slot: usize,
    pub len: usize,
}

/// Outcome of one axis within a failed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisStatus {
    Ok,
    Failed(AxisFault),
}

impl AxisStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, AxisStatus::Failed(_))
    }
}

impl fmt::Display for AxisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisStatus::Ok => write!(f, "ok"),
            AxisStatus::Failed(fault) => write!(f, "{}", fault),
        }
    }
}

/// Search errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Search failed: size path: {size}; color path: {color}")]
    AxisFailed { size: AxisStatus, color: AxisStatus },
}

impl SearchError {
    /// Aggregates both axis outcomes. Callers pass at least one fault.
    pub fn axis_failed(size: Option<AxisFault>, color: Option<AxisFault>) -> Self {
        let status = |fault: Option<AxisFault>| fault.map_or(AxisStatus::Ok, AxisStatus::Failed);
        SearchError::AxisFailed {
            size: status(size),
            color: status(color),
        }
    }

    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::AxisFailed { .. } => "FACET_SEARCH_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault(attribute: &'static str) -> AxisFault {
        AxisFault {
            attribute,
            value: "Medium".to_string(),
            slot: 9,
            len: 5,
        }
    }

    #[test]
    fn test_message_names_both_paths() {
        let err = SearchError::axis_failed(Some(fault("size")), None);
        let display = err.to_string();

        assert!(display.contains("size path: size 'Medium' bucket references slot 9"));
        assert!(display.ends_with("color path: ok"));
        assert_eq!(err.code(), "FACET_SEARCH_FAILED");
    }

    #[test]
    fn test_both_paths_failed() {
        let err = SearchError::axis_failed(Some(fault("size")), Some(fault("color")));
        let SearchError::AxisFailed { size, color } = err;

        assert!(size.is_failed());
        assert!(color.is_failed());
    }
}
