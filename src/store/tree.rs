//! The AVL-balanced ordered store

use std::cmp::Ordering;

use crate::observability::StoreMetrics;
use crate::record::{Record, SearchField};

use super::errors::{StoreError, StoreResult};
use super::fold::{cmp_ignore_case, contains_folded, fold, FoldedKey};
use super::iter::Iter;
use super::node::{self, rebalance, Link, Node};

/// What [`OrderedStore::insert`] did with the record it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was added and the path to the root rebalanced
    Inserted,
    /// A record with the same key (ignoring case) was already present;
    /// the new record was dropped and the tree is unchanged
    Ignored,
}

impl InsertOutcome {
    /// Returns true if the record was added
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// In-memory, case-insensitive, key-ordered record store.
#[derive(Debug, Default)]
pub struct OrderedStore {
    root: Link,
    len: usize,
    metrics: StoreMetrics,
}

impl OrderedStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, keeping the tree balanced.
    ///
    /// If a record whose key matches ignoring case already exists, the
    /// existing record is kept and `record` is dropped.
    pub fn insert(&mut self, record: Record) -> InsertOutcome {
        let folded = FoldedKey::new(record.key());
        let mut state = InsertState {
            outcome: InsertOutcome::Ignored,
            rotations: 0,
        };

        let root = insert_into(self.root.take(), record, folded, &mut state);
        self.root = Some(root);

        match state.outcome {
            InsertOutcome::Inserted => {
                self.len += 1;
                self.metrics.increment_inserts();
                self.metrics.add_rotations(state.rotations);
            }
            InsertOutcome::Ignored => self.metrics.increment_duplicates_ignored(),
        }
        state.outcome
    }

    /// Returns true if a record with this key (ignoring case) is stored
    pub fn member(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the record stored under this key, ignoring case
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.metrics.increment_point_lookups();
        let probe = FoldedKey::new(key);

        let mut link = &self.root;
        while let Some(node) = link {
            match probe.cmp(&node.folded) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    /// Returns every record in ascending key order
    pub fn all_records(&self) -> Vec<&Record> {
        self.iter().collect()
    }

    /// Iterates records in ascending key order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }

    /// Returns the record with the smallest key
    pub fn first(&self) -> StoreResult<&Record> {
        let mut node = self.root.as_deref().ok_or_else(|| StoreError::empty("first"))?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.record)
    }

    /// Returns the record with the largest key
    pub fn last(&self) -> StoreResult<&Record> {
        let mut node = self.root.as_deref().ok_or_else(|| StoreError::empty("last"))?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.record)
    }

    /// Returns the record with the greatest key strictly less than `key`.
    ///
    /// `key` does not have to be stored.
    pub fn predecessor(&self, key: &str) -> Option<&Record> {
        self.metrics.increment_neighbor_lookups();
        let probe = FoldedKey::new(key);

        let mut candidate = None;
        let mut link = &self.root;
        while let Some(node) = link {
            if node.folded < probe {
                candidate = Some(&node.record);
                link = &node.right;
            } else {
                link = &node.left;
            }
        }
        candidate
    }

    /// Returns the record with the smallest key strictly greater than `key`.
    pub fn successor(&self, key: &str) -> Option<&Record> {
        self.metrics.increment_neighbor_lookups();
        let probe = FoldedKey::new(key);

        let mut candidate = None;
        let mut link = &self.root;
        while let Some(node) = link {
            if node.folded > probe {
                candidate = Some(&node.record);
                link = &node.left;
            } else {
                link = &node.right;
            }
        }
        candidate
    }

    /// Returns all records whose `field` contains `word`, ignoring case,
    /// in ascending key order.
    ///
    /// Visits every node: substring matches do not follow key order.
    pub fn find_by_field(&self, word: &str, field: SearchField) -> Vec<&Record> {
        self.metrics.increment_field_scans();
        let needle = fold(word);
        let mut matches = Vec::new();
        collect_matches(&self.root, &needle, field, &mut matches);
        matches
    }

    /// Records whose key contains `word`
    pub fn with_word(&self, word: &str) -> Vec<&Record> {
        self.find_by_field(word, SearchField::Key)
    }

    /// Records whose translation contains `word`
    pub fn with_word_in_translation(&self, word: &str) -> Vec<&Record> {
        self.find_by_field(word, SearchField::Translation)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no records are stored
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Counters for this store
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Walks the whole tree and checks every structural invariant.
    ///
    /// Checks cached heights, the balance bound, strict key order, the
    /// cached folded keys and the record count.
    pub fn validate(&self) -> StoreResult<()> {
        let mut walk = Validation {
            previous: None,
            count: 0,
        };
        walk.check(&self.root)?;

        if walk.count != self.len {
            return Err(StoreError::invariant_violated(format!(
                "store reports {} records but tree holds {}",
                self.len, walk.count
            )));
        }
        Ok(())
    }
}

impl FromIterator<Record> for OrderedStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = OrderedStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<Record> for OrderedStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedStore {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct InsertState {
    outcome: InsertOutcome,
    rotations: u64,
}

fn insert_into(link: Link, record: Record, folded: FoldedKey, state: &mut InsertState) -> Box<Node> {
    let mut node = match link {
        None => {
            state.outcome = InsertOutcome::Inserted;
            return Node::leaf(record, folded);
        }
        Some(node) => node,
    };

    match folded.cmp(&node.folded) {
        Ordering::Less => {
            node.left = Some(insert_into(node.left.take(), record, folded, state));
        }
        Ordering::Greater => {
            node.right = Some(insert_into(node.right.take(), record, folded, state));
        }
        Ordering::Equal => return node,
    }

    // Nothing below changed shape
    if state.outcome == InsertOutcome::Ignored {
        return node;
    }

    let (node, rotations) = rebalance(node);
    state.rotations += rotations;
    node
}

fn collect_matches<'a>(link: &'a Link, needle: &str, field: SearchField, out: &mut Vec<&'a Record>) {
    if let Some(node) = link {
        collect_matches(&node.left, needle, field, out);

        let hit = match field {
            SearchField::Key => node.folded.as_str().contains(needle),
            _ => contains_folded(field.text(&node.record), needle),
        };
        if hit {
            out.push(&node.record);
        }

        collect_matches(&node.right, needle, field, out);
    }
}

struct Validation<'a> {
    previous: Option<&'a Record>,
    count: usize,
}

impl<'a> Validation<'a> {
    /// In-order walk; returns the recomputed height of `link`
    fn check(&mut self, link: &'a Link) -> StoreResult<u32> {
        let node = match link {
            Some(node) => node,
            None => return Ok(0),
        };

        let left = self.check(&node.left)?;

        let key = node.record.key();
        if node.folded != FoldedKey::new(key) {
            return Err(StoreError::invariant_violated(format!(
                "cached folded key '{}' does not match key '{}'",
                node.folded, key
            )));
        }
        if let Some(previous) = self.previous {
            if cmp_ignore_case(previous.key(), key) != Ordering::Less {
                return Err(StoreError::invariant_violated(format!(
                    "key '{}' does not sort after '{}'",
                    key,
                    previous.key()
                )));
            }
        }
        self.previous = Some(&node.record);
        self.count += 1;

        let right = self.check(&node.right)?;

        let expected = 1 + left.max(right);
        if node.height != expected {
            return Err(StoreError::invariant_violated(format!(
                "node '{}' has height {} but children give {}",
                key, node.height, expected
            )));
        }
        if left.abs_diff(right) > 1 {
            return Err(StoreError::invariant_violated(format!(
                "node '{}' is unbalanced: left {} right {}",
                key, left, right
            )));
        }
        Ok(expected)
    }
}
