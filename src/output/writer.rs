use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::models::ResourceRecord;
use super::base58;

/// Writes records as `name url` lines
///
/// Failures are logged and otherwise ignored.
pub fn save_text(records: &[ResourceRecord], path: &Path) {
    let body: String = records.iter().map(|r| format!("{}\n", r)).collect();
    report(write_file(path, body.as_bytes()), path, "text results");
}

/// Writes a value as pretty JSON with four-space indentation, non-ASCII kept as is
///
/// Failures are logged and otherwise ignored.
pub fn save_json<T: Serialize>(value: &T, path: &Path) {
    let result = to_pretty_json(value).and_then(|bytes| write_file(path, &bytes));
    report(result, path, "JSON results");
}

/// Writes the base-58 encoding of a value's compact JSON form
///
/// Failures are logged and otherwise ignored.
pub fn save_base58<T: Serialize>(value: &T, path: &Path) {
    let result = serde_json::to_string(value)
        .context("Failed to serialize value to JSON")
        .and_then(|json| write_file(path, base58::encode_str(&json).as_bytes()));
    report(result, path, "base58 results");
}

/// Serializes a value the way the output files are laid out
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize value to JSON")?;
    Ok(buffer)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn report(result: Result<()>, path: &Path, what: &str) {
    match result {
        Ok(()) => info!("Saved {} to {}", what, path.display()),
        Err(e) => error!("Could not save {}: {:#}", what, e),
    }
}
