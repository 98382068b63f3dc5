//! CLI Protocol Tests
//!
//! Tests for the JSON line protocol and boot sequence:
//! - Boot from config and seed file
//! - Request/response round trips through serve_lines
//! - Error responses keep the session alive

use glossdb::cli::{boot, boot_with, serve_lines, CliErrorCode, Config};
use glossdb::store::OrderedStore;
use serde_json::Value;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const SEED: &str = r#"[
    {"key": "He huewai ola ke kanaka na Kāne.", "translation": "People are Kāne's living water gourd.", "note": "Water is life."},
    {"key": "ʻAu i ke kai me he manu ala.", "translation": "Cross the sea as a bird."},
    {"key": "E kuahui like i ka hana.", "translation": "Let everybody pitch in and work together.", "note": "Teamwork."},
    {"key": "e kuahui like i ka hana.", "translation": "duplicate"}
]"#;

fn write_setup(config: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("seed.json"), SEED).unwrap();
    let config_path = dir.path().join("glossdb.json");
    fs::write(&config_path, config).unwrap();
    (dir, config_path)
}

fn run_session(store: &mut OrderedStore, requests: &[&str]) -> Vec<Value> {
    let input = Cursor::new(requests.join("\n"));
    let mut out = Vec::new();
    serve_lines(store, input, &mut out).unwrap();

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================================
// Boot Tests
// =============================================================================

/// Seeding keeps the first of two case-insensitive duplicates.
#[test]
fn test_boot_seeds_store() {
    let (_dir, config_path) = write_setup(r#"{"seed_file": "seed.json"}"#);

    let store = boot(&config_path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.get("E KUAHUI LIKE I KA HANA.").unwrap().note(),
        "Teamwork."
    );
    store.validate().unwrap();
}

#[test]
fn test_boot_strict_seed_rejects_duplicate() {
    let (_dir, config_path) = write_setup(r#"{"seed_file": "seed.json", "strict_seed": true}"#);

    let err = boot(&config_path).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::SeedError);
    assert!(err.message().contains("e kuahui like i ka hana."));
}

#[test]
fn test_boot_missing_seed_file() {
    let (_dir, config_path) = write_setup(r#"{"seed_file": "absent.json"}"#);

    let err = boot(&config_path).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::SeedError);
}

#[test]
fn test_boot_without_seed_is_empty() {
    let store = boot_with(&Config::default()).unwrap();
    assert!(store.is_empty());
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_queries() {
    let (_dir, config_path) = write_setup(r#"{"seed_file": "seed.json"}"#);
    let mut store = boot(&config_path).unwrap();

    let responses = run_session(
        &mut store,
        &[
            r#"{"op":"first"}"#,
            r#"{"op":"last"}"#,
            r#"{"op":"member","key":"ʻAU I KE KAI ME HE MANU ALA."}"#,
            r#"{"op":"successor","key":"E kuahui like i ka hana."}"#,
            r#"{"op":"predecessor","key":"A"}"#,
            r#"{"op":"find","word":"SEA","field":"translation"}"#,
            r#"{"op":"find","word":"xyz"}"#,
        ],
    );

    assert_eq!(responses.len(), 7);
    assert!(responses.iter().all(|r| r["status"] == "ok"));
    assert_eq!(responses[0]["data"]["key"], "E kuahui like i ka hana.");
    assert_eq!(responses[1]["data"]["key"], "ʻAu i ke kai me he manu ala.");
    assert_eq!(responses[2]["data"]["member"], true);
    assert_eq!(responses[3]["data"]["key"], "He huewai ola ke kanaka na Kāne.");
    assert!(responses[4]["data"].is_null());
    assert_eq!(responses[5]["data"][0]["key"], "ʻAu i ke kai me he manu ala.");
    assert_eq!(responses[6]["data"], Value::Array(vec![]));
}

/// Inserts are visible to later requests in the same session.
#[test]
fn test_session_insert_then_list() {
    let mut store = OrderedStore::new();

    let responses = run_session(
        &mut store,
        &[
            r#"{"op":"insert","record":{"key":"Mu","translation":"m"}}"#,
            r#"{"op":"insert","record":{"key":"Alpha","translation":"a"}}"#,
            r#"{"op":"insert","record":{"key":"MU","translation":"dup"}}"#,
            r#"{"op":"all"}"#,
            r#"{"op":"stats"}"#,
        ],
    );

    assert_eq!(responses[0]["data"]["inserted"], true);
    assert_eq!(responses[2]["data"]["inserted"], false);

    let all = responses[3]["data"].as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["key"], "Alpha");
    assert_eq!(all[1]["translation"], "m");
    assert_eq!(all[1]["note"], "");

    assert_eq!(responses[4]["data"]["records"], 2);
    assert_eq!(responses[4]["data"]["duplicates_ignored"], 1);
}

#[test]
fn test_session_errors_do_not_stop_serving() {
    let mut store = OrderedStore::new();

    let responses = run_session(
        &mut store,
        &[
            r#"{"op":"last"}"#,
            r#"{"op":"unknown"}"#,
            r#"{"op":"member"}"#,
            r#"{"op":"member","key":"x"}"#,
        ],
    );

    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["status"], "error");
    assert_eq!(responses[0]["code"], "GLOSS_STORE_EMPTY");
    assert_eq!(responses[1]["code"], "GLOSS_CLI_BAD_REQUEST");
    assert_eq!(responses[2]["code"], "GLOSS_CLI_BAD_REQUEST");
    assert_eq!(responses[3]["data"]["member"], false);
}
