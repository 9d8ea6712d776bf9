//! Whole-manifest normalization: pick a harvesting strategy, normalize all.
//!
//! Strategy selection (only one runs per manifest):
//!
//! 1. Collect every array stored under a key named `Symbols` or `Objects`
//!    (case-insensitive), anywhere in the tree, depth-first in key order.
//! 2. If none exists, fall back to [`extract_known_sections`].
//!
//! `serde_json::Value` is an owned tree, so the walks cannot revisit a node;
//! the depth cap is the only guard needed against hostile input.

use serde_json::Value;
use tracing::{debug, warn};

use super::normalize::normalize;
use super::sections::extract_known_sections;
use super::types::ObjectDescriptor;

/// Every `Symbols`/`Objects` array in the manifest, in discovery order.
///
/// Arrays are also descended into, so nested symbol arrays are collected
/// after their parent.
pub fn collect_symbol_arrays(raw: &Value, max_depth: usize) -> Vec<&Vec<Value>> {
    let mut out = Vec::new();
    let mut truncated = false;
    walk(raw, 0, max_depth, &mut out, &mut truncated);
    if truncated {
        warn!(
            "Manifest nesting exceeds depth {}; deeper symbol arrays were skipped",
            max_depth
        );
    }
    out
}

fn walk<'a>(
    value: &'a Value,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<&'a Vec<Value>>,
    truncated: &mut bool,
) {
    if depth > max_depth {
        *truncated = true;
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, depth + 1, max_depth, out, truncated);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                if let Value::Array(items) = child {
                    if key.eq_ignore_ascii_case("symbols") || key.eq_ignore_ascii_case("objects") {
                        out.push(items);
                    }
                }
                walk(child, depth + 1, max_depth, out, truncated);
            }
        }
        _ => {}
    }
}

/// Normalize every object in a manifest.
pub fn normalize_manifest(raw: &Value, max_depth: usize) -> Vec<ObjectDescriptor> {
    let arrays = collect_symbol_arrays(raw, max_depth);
    if !arrays.is_empty() {
        let objects: Vec<ObjectDescriptor> = arrays
            .into_iter()
            .flatten()
            .map(normalize)
            .collect();
        debug!(
            "Harvested {} objects from Symbols/Objects arrays",
            objects.len()
        );
        return objects;
    }

    let objects: Vec<ObjectDescriptor> = extract_known_sections(raw, max_depth)
        .iter()
        .map(normalize)
        .collect();
    debug!("Harvested {} objects from per-type sections", objects.len());
    objects
}
