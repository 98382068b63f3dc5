//! Ordered store subsystem for glossdb
//!
//! An AVL tree of records keyed by a case-folded copy of the record key.
//!
//! # Invariants
//!
//! - `height = 1 + max(height(left), height(right))`, absent child = 0
//! - `|height(left) - height(right)| <= 1` at every node after each insert
//! - In-order keys are strictly increasing, ignoring case
//! - Inserting a key already present (ignoring case) is a silent no-op;
//!   the first record written wins
//!
//! # Concurrency
//!
//! Reads take `&self` and writes take `&mut self`. Sharing a store across
//! threads needs an external lock such as `RwLock<OrderedStore>`.

mod errors;
mod fold;
mod iter;
mod node;
mod tree;

pub use errors::{Severity, StoreError, StoreErrorCode, StoreResult};
pub use fold::{cmp_ignore_case, fold, FoldedKey};
pub use iter::Iter;
pub use tree::{InsertOutcome, OrderedStore};
