//! Record subsystem for glossdb
//!
//! A record is a short text entry: a headword (the key) plus two
//! associated text fields. Records are immutable once built.
//!
//! # Invariants
//!
//! - Fields are stored verbatim; case folding happens in the store
//! - Construction never fails, for any input text

mod field;
mod record;

pub use field::SearchField;
pub use record::Record;
