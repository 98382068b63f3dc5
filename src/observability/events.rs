//! Observable events for glossdb
//!
//! Events are explicit and typed. The engine itself emits none; the CLI
//! logs these around boot and request handling.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Seed file read and inserted
    SeedLoaded,
    /// A seed entry was skipped because its key was already present
    SeedDuplicateIgnored,
    /// Store built and verified, ready for requests
    StoreReady,
    /// A request was answered
    RequestComplete,
    /// A request was malformed or failed
    RequestRejected,
    /// Verification found a broken tree (FATAL)
    InvariantCheckFailed,
    /// Input exhausted, process exiting
    ShutdownComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::SeedDuplicateIgnored => "SEED_DUPLICATE_IGNORED",
            Event::StoreReady => "STORE_READY",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::InvariantCheckFailed => "INVARIANT_CHECK_FAILED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::InvariantCheckFailed)
    }

    /// Returns true if this event should be logged as a warning
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::SeedDuplicateIgnored | Event::RequestRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
