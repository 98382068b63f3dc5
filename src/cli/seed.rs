//! Seed file loading
//!
//! A seed file is a JSON array of records. Loading it goes through the
//! normal insert path, so duplicate keys keep the first record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};
use crate::record::Record;
use crate::store::OrderedStore;

/// Errors raised while reading or applying a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("cannot read seed file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed file is not a JSON array of records
    #[error("invalid seed file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A seed entry repeats an earlier key (strict mode only)
    #[error("duplicate seed key '{key}' at entry {index}")]
    DuplicateKey { key: String, index: usize },
}

/// Counts from applying a seed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Records added to the store
    pub inserted: usize,
    /// Keys skipped because they were already present
    pub ignored: Vec<String>,
}

/// Read the records in a seed file
pub fn load_records(path: &Path) -> Result<Vec<Record>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Insert seed records into the store.
///
/// With `strict` set, the first duplicate aborts with an error; records
/// before it stay inserted. Otherwise duplicates are logged and skipped.
pub fn apply_seed(
    store: &mut OrderedStore,
    records: Vec<Record>,
    strict: bool,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for (index, record) in records.into_iter().enumerate() {
        let key = record.key().to_string();
        if store.insert(record).is_inserted() {
            report.inserted += 1;
            continue;
        }

        if strict {
            return Err(SeedError::DuplicateKey { key, index });
        }
        log_event_with_fields(Event::SeedDuplicateIgnored, &[("key", key.as_str())]);
        report.ignored.push(key);
    }

    Ok(report)
}
