//! Store error types
//!
//! Error codes:
//! - GLOSS_STORE_EMPTY (ERROR)
//! - GLOSS_STORE_INVARIANT_VIOLATED (FATAL)
//!
//! Duplicate keys are not an error. Insert of a duplicate is a silent no-op.

use std::fmt;

/// Severity levels for store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The caller asked for something that does not exist; the store is fine
    Error,
    /// The tree structure is broken and must not be trusted
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Store-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// first/last called on a store with no records
    GlossStoreEmpty,
    /// Verification found a broken height, balance or order invariant
    GlossStoreInvariantViolated,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::GlossStoreEmpty => "GLOSS_STORE_EMPTY",
            StoreErrorCode::GlossStoreInvariantViolated => "GLOSS_STORE_INVARIANT_VIOLATED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::GlossStoreEmpty => Severity::Error,
            StoreErrorCode::GlossStoreInvariantViolated => Severity::Fatal,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    /// The store holds no records
    pub fn empty(operation: &str) -> Self {
        Self {
            code: StoreErrorCode::GlossStoreEmpty,
            message: format!("{} on empty store", operation),
        }
    }

    /// A structural invariant does not hold
    pub fn invariant_violated(reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::GlossStoreInvariantViolated,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether the store should no longer be used
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreErrorCode::GlossStoreEmpty.code(), "GLOSS_STORE_EMPTY");
        assert_eq!(
            StoreErrorCode::GlossStoreInvariantViolated.code(),
            "GLOSS_STORE_INVARIANT_VIOLATED"
        );
    }

    #[test]
    fn test_empty_is_not_fatal() {
        let err = StoreError::empty("first");
        assert_eq!(err.code(), StoreErrorCode::GlossStoreEmpty);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_invariant_violation_is_fatal() {
        let err = StoreError::invariant_violated("height mismatch");
        assert!(err.is_fatal());
        assert_eq!(err.message(), "height mismatch");
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::empty("last");
        let display = format!("{}", err);
        assert_eq!(display, "[ERROR] GLOSS_STORE_EMPTY: last on empty store");
    }
}
