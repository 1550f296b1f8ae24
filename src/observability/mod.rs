//! Observability
//!
//! - Structured logging (JSON lines)
//! - Passive search metrics
//! - Lifecycle events
//!
//! Observability is read-only: nothing here can change a search result.

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, SearchMetrics};
pub use scope::{ObservationScope, Timer};

#[cfg(test)]
pub(crate) use logger::capture;

/// Log a typed event at the severity the event implies
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_uses_event_severity() {
        let ((), lines) = logger::capture::lines(|| {
            log_event(Event::SearchComplete, &[("matched", "0")]);
            log_event(Event::SearchUnknownValue, &[("value", "Green")]);
        });

        assert_eq!(lines[0]["event"], "SEARCH_COMPLETE");
        assert_eq!(lines[0]["severity"], "INFO");
        assert_eq!(lines[1]["event"], "SEARCH_UNKNOWN_VALUE");
        assert_eq!(lines[1]["severity"], "WARN");
        assert_eq!(lines[1]["value"], "Green");
    }
}
