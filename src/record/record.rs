//! The stored record value

use std::fmt;

use serde::{Deserialize, Serialize};

/// A headword with its translation and an optional note.
///
/// Ordering and duplicate detection are not defined here. The store
/// compares records by a case-folded copy of [`Record::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    key: String,
    translation: String,
    #[serde(default)]
    note: String,
}

impl Record {
    /// Creates a record with an empty note
    pub fn new(key: impl Into<String>, translation: impl Into<String>) -> Self {
        Self::with_note(key, translation, String::new())
    }

    /// Creates a record with all three fields
    pub fn with_note(
        key: impl Into<String>,
        translation: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            translation: translation.into(),
            note: note.into(),
        }
    }

    /// Returns the key exactly as it was given
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the translation
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Returns the note, empty when none was given
    pub fn note(&self) -> &str {
        &self.note
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: {}\nTranslation: {}\nNote: {}",
            self.key, self.translation, self.note
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults_to_empty() {
        let record = Record::new("Aloha", "Love");
        assert_eq!(record.key(), "Aloha");
        assert_eq!(record.translation(), "Love");
        assert_eq!(record.note(), "");
    }

    #[test]
    fn test_fields_kept_verbatim() {
        let record = Record::with_note("ʻAu i ke KAI", "Cross the sea", "A metaphor.");
        assert_eq!(record.key(), "ʻAu i ke KAI");
        assert_eq!(record.translation(), "Cross the sea");
        assert_eq!(record.note(), "A metaphor.");
    }

    #[test]
    fn test_empty_fields_allowed() {
        let record = Record::with_note("", "", "");
        assert_eq!(record.key(), "");
        assert_eq!(record.to_string(), "Key: \nTranslation: \nNote: ");
    }

    #[test]
    fn test_display_three_lines() {
        let record = Record::with_note("Ulu o ka lā", "Growth of the sun", "Sunrise.");
        let rendered = record.to_string();

        assert_eq!(
            rendered,
            "Key: Ulu o ka lā\nTranslation: Growth of the sun\nNote: Sunrise."
        );
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_deserialize_without_note() {
        let record: Record =
            serde_json::from_str(r#"{"key":"Mu","translation":"Silence"}"#).unwrap();
        assert_eq!(record, Record::new("Mu", "Silence"));
    }
}
