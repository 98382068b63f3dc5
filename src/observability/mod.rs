//! Observability subsystem for glossdb
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Store counters
//!
//! Observability is read-only: it never changes what an operation returns.
//!
//! ```ignore
//! use glossdb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SeedLoaded, &[("records", "42")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, StoreMetrics};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_for_events() {
        assert_eq!(severity_for(Event::InvariantCheckFailed), Severity::Fatal);
        assert_eq!(severity_for(Event::RequestRejected), Severity::Warn);
        assert_eq!(severity_for(Event::StoreReady), Severity::Info);
    }

    #[test]
    fn test_log_event() {
        // Only checks that logging does not panic
        log_event(Event::StoreReady);
        log_event_with_fields(Event::ConfigLoaded, &[("seed_file", "/tmp/seed.json")]);
    }
}
