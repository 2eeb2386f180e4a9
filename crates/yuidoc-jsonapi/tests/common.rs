#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::Value;
use yuidoc_jsonapi::YuiDoc;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ember-data-docs.json")
}

/// The fixture as raw JSON, for comparing against the source records.
pub fn fixture_json() -> Value {
    let json = std::fs::read_to_string(fixture_path()).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

pub fn fixture() -> YuiDoc {
    serde_json::from_value(fixture_json()).expect("Fixture is not a YUIDoc document")
}

pub fn run_cli(args: &[&str]) -> (String, String, bool) {
    match yuidoc_jsonapi::run_cli(args) {
        Ok(stdout) => (stdout, String::new(), true),
        Err(stderr) => (String::new(), stderr, false),
    }
}
