//! Manifest location and decoding.
//!
//! Input is either an app package (ZIP) or the manifest JSON itself. For
//! archives, the manifest entry is chosen by name, case-insensitively, in
//! order of preference:
//!
//! 1. a name ending in `symbolreferences.json`
//! 2. a name matching `symbol*.json`
//! 3. any `.json` entry

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::archive::PackageArchive;
use super::error::PackageError;
use crate::core::text_utils::clean_text;

static SYMBOL_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)symbol.*\.json$").expect("valid"));

/// A decoded manifest and, for ZIP input, the archive it came from.
#[derive(Debug)]
pub struct ManifestSource {
    pub raw: Value,
    pub archive: Option<PackageArchive>,
}

/// Pick the manifest entry among `names`.
pub fn find_manifest_entry(names: &[String]) -> Option<&str> {
    let lower: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    first_match(names, &lower, |n| n.ends_with("symbolreferences.json"))
        .or_else(|| first_match(names, &lower, |n| SYMBOL_JSON.is_match(n)))
        .or_else(|| first_match(names, &lower, |n| n.ends_with(".json")))
}

fn first_match<'a>(
    names: &'a [String],
    lower: &[String],
    pred: impl Fn(&str) -> bool,
) -> Option<&'a str> {
    lower
        .iter()
        .position(|n| pred(n))
        .map(|i| names[i].as_str())
}

/// Parse manifest text, ignoring a leading byte order mark and surrounding
/// whitespace.
pub fn parse_manifest_text(text: &str) -> Result<Value, PackageError> {
    serde_json::from_str(clean_text(text)).map_err(|e| PackageError::invalid_json(e.to_string()))
}

/// Read the manifest from package bytes or JSON text.
///
/// Input that does not open as a ZIP archive is decoded as UTF-8 JSON.
pub fn read_manifest(input: &[u8]) -> Result<ManifestSource, PackageError> {
    if cfg!(feature = "archive") {
        match PackageArchive::open(input.to_vec()) {
            Ok(archive) => return read_from_archive(archive),
            Err(e) => debug!("Input is not a package archive ({e}); reading as JSON text"),
        }
    }

    let raw = parse_manifest_text(&String::from_utf8_lossy(input))?;
    Ok(ManifestSource { raw, archive: None })
}

fn read_from_archive(mut archive: PackageArchive) -> Result<ManifestSource, PackageError> {
    let entry = find_manifest_entry(archive.entry_names())
        .map(str::to_string)
        .ok_or(PackageError::ManifestNotFound)?;
    debug!("Reading symbol manifest from archive entry '{}'", entry);

    let text = archive.read_text(&entry)?;
    let raw = parse_manifest_text(&text)?;
    Ok(ManifestSource {
        raw,
        archive: Some(archive),
    })
}
