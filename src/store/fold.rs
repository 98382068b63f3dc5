//! Case folding for keys and search text
//!
//! Folding maps every char to upper case and then to lower case, so
//! letters with several lower-case forms (`ς`/`σ`, `ſ`/`s`) fold alike.
//! Two keys are duplicates exactly when their folded forms are equal, and
//! key order is the byte order of the folded forms.

use std::cmp::Ordering;
use std::fmt;

/// A case-folded key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoldedKey(String);

impl FoldedKey {
    /// Folds the given text
    pub fn new(text: &str) -> Self {
        FoldedKey(fold(text))
    }

    /// Returns the folded text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoldedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Folds text char by char: upper case, then lower case.
pub fn fold(text: &str) -> String {
    folded_chars(text).collect()
}

/// Compares two texts ignoring case, without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    folded_chars(a).cmp(folded_chars(b))
}

fn folded_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

/// Returns true if `haystack` contains the already-folded `needle`.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}
