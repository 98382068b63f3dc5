//! glossdb - a case-insensitive, key-ordered in-memory record store
//!
//! Records (a headword plus a translation and a note) are kept in an AVL
//! tree keyed by the case-folded headword, so lookups, ordered listing and
//! neighbor queries stay logarithmic whatever the insertion order.
//!
//! ```
//! use glossdb::record::{Record, SearchField};
//! use glossdb::store::OrderedStore;
//!
//! let mut store = OrderedStore::new();
//! store.insert(Record::new("Gamma", "third"));
//! store.insert(Record::new("Alpha", "first"));
//!
//! assert!(store.member("ALPHA"));
//! assert_eq!(store.successor("Alpha").map(|r| r.key()), Some("Gamma"));
//! assert_eq!(store.find_by_field("THIRD", SearchField::Translation).len(), 1);
//! ```

pub mod cli;
pub mod observability;
pub mod record;
pub mod store;
