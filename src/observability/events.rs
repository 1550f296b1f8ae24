//! Observable search events
//!
//! Engine construction is covered by `ObservationScope("ENGINE_BUILD")`.

use std::fmt;

use super::logger::Severity;

/// Events emitted while serving searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Search returned a complete result
    SearchComplete,
    /// Search failed as a whole
    SearchFailed,
    /// A selected value is not in its registry
    SearchUnknownValue,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SearchComplete => "SEARCH_COMPLETE",
            Event::SearchFailed => "SEARCH_FAILED",
            Event::SearchUnknownValue => "SEARCH_UNKNOWN_VALUE",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::SearchComplete => Severity::Info,
            Event::SearchFailed => Severity::Error,
            Event::SearchUnknownValue => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
