//! Request protocol
//!
//! Requests are JSON objects tagged by `op`:
//!
//! ```json
//! {"op":"insert","record":{"key":"Aloha","translation":"Love"}}
//! {"op":"predecessor","key":"Gamma"}
//! {"op":"find","word":"sun","field":"translation"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::record::{Record, SearchField};
use crate::store::{OrderedStore, StoreResult};

use super::errors::{CliError, CliResult};

/// A single store operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Insert {
        record: Record,
    },
    Member {
        key: String,
    },
    Get {
        key: String,
    },
    All,
    First,
    Last,
    Predecessor {
        key: String,
    },
    Successor {
        key: String,
    },
    Find {
        word: String,
        #[serde(default = "default_field")]
        field: SearchField,
    },
    Stats,
}

fn default_field() -> SearchField {
    SearchField::Key
}

impl Request {
    /// Parse a request line
    pub fn parse(line: &str) -> CliResult<Self> {
        serde_json::from_str(line.trim())
            .map_err(|e| CliError::bad_request(format!("Invalid request: {}", e)))
    }

    /// Operation name, for logging
    pub fn op(&self) -> &'static str {
        match self {
            Request::Insert { .. } => "insert",
            Request::Member { .. } => "member",
            Request::Get { .. } => "get",
            Request::All => "all",
            Request::First => "first",
            Request::Last => "last",
            Request::Predecessor { .. } => "predecessor",
            Request::Successor { .. } => "successor",
            Request::Find { .. } => "find",
            Request::Stats => "stats",
        }
    }
}

/// Run one request against the store and return the response data.
///
/// Only `first` and `last` can fail, on an empty store.
pub fn execute(store: &mut OrderedStore, request: Request) -> StoreResult<Value> {
    let data = match request {
        Request::Insert { record } => json!({ "inserted": store.insert(record).is_inserted() }),
        Request::Member { key } => json!({ "member": store.member(&key) }),
        Request::Get { key } => json!(store.get(&key)),
        Request::All => json!(store.all_records()),
        Request::First => json!(store.first()?),
        Request::Last => json!(store.last()?),
        Request::Predecessor { key } => json!(store.predecessor(&key)),
        Request::Successor { key } => json!(store.successor(&key)),
        Request::Find { word, field } => json!(store.find_by_field(&word, field)),
        Request::Stats => {
            let m = store.metrics().snapshot();
            json!({
                "records": store.len(),
                "height": store.height(),
                "inserts": m.inserts,
                "duplicates_ignored": m.duplicates_ignored,
                "rotations": m.rotations,
                "point_lookups": m.point_lookups,
                "neighbor_lookups": m.neighbor_lookups,
                "field_scans": m.field_scans,
            })
        }
    };
    Ok(data)
}
