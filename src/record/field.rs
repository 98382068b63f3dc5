//! Field selector for substring search

use serde::{Deserialize, Serialize};

use super::Record;

/// Selects which text field of a [`Record`] a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// The headword
    Key,
    /// The translation text
    Translation,
    /// The free-form note
    Note,
}

impl SearchField {
    /// Returns the selected field's text
    pub fn text<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            SearchField::Key => record.key(),
            SearchField::Translation => record.translation(),
            SearchField::Note => record.note(),
        }
    }

    /// Returns the lowercase field name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Key => "key",
            SearchField::Translation => "translation",
            SearchField::Note => "note",
        }
    }
}
