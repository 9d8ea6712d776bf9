//! Object harvesting from per-type manifest sections.
//!
//! Used when a manifest has no `Symbols`/`Objects` array anywhere. Older
//! manifests list objects under one array per type (`Tables`, `Pages`, ...),
//! possibly nested under `Namespaces`. Each harvested item is tagged with its
//! canonical type so the normalizer can treat it like any symbol entry.

use serde_json::{Map, Value};
use tracing::warn;

use super::types::UNDEFINED_KIND;

/// Section name → canonical object type, in harvesting order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("Tables", "Table"),
    ("TableExtensions", "TableExtension"),
    ("Pages", "Page"),
    ("Reports", "Report"),
    ("XmlPorts", "XmlPort"),
    ("Queries", "Query"),
    ("Codeunits", "Codeunit"),
    ("ControlAddIns", "ControlAddIn"),
    ("EnumTypes", "EnumType"),
    ("EnumExtensions", "EnumExtension"),
    ("Interfaces", "Interface"),
    ("PermissionSets", "PermissionSet"),
    ("PermissionSetExtensions", "PermissionSetExtension"),
    ("ReportExtensions", "ReportExtension"),
    ("PageExtensions", "PageExtension"),
    ("DotNetPackages", "DotNetPackage"),
    ("Profiles", "Profile"),
    ("PageCustomizations", "PageCustomization"),
    ("Entitlements", "Entitlement"),
];

/// Flatten known sections into a list of type-tagged objects.
///
/// Order: sections in [`SECTIONS`] order, then the generic `Objects` array,
/// then each entry of `Namespaces` recursively. `max_depth` bounds the
/// namespace recursion.
pub fn extract_known_sections(raw: &Value, max_depth: usize) -> Vec<Value> {
    let mut out = Vec::new();
    let mut truncated = false;
    harvest(raw, 0, max_depth, &mut out, &mut truncated);
    if truncated {
        warn!(
            "Namespace nesting exceeds depth {}; deeper namespaces were skipped",
            max_depth
        );
    }
    out
}

fn harvest(
    value: &Value,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<Value>,
    truncated: &mut bool,
) {
    let Some(obj) = value.as_object() else {
        return;
    };
    if depth > max_depth {
        *truncated = true;
        return;
    }

    for (section, type_name) in SECTIONS {
        if let Some(items) = obj.get(*section).and_then(Value::as_array) {
            out.extend(items.iter().map(|item| tag_with_type(item, type_name)));
        }
    }

    if let Some(items) = obj.get("Objects").and_then(Value::as_array) {
        for item in items {
            let declared = ["Type", "type"]
                .iter()
                .filter_map(|key| item.get(*key).and_then(Value::as_str))
                .find(|t| !t.is_empty())
                .unwrap_or(UNDEFINED_KIND)
                .to_string();
            out.push(tag_with_type(item, &declared));
        }
    }

    if let Some(namespaces) = obj.get("Namespaces").and_then(Value::as_array) {
        for namespace in namespaces {
            harvest(namespace, depth + 1, max_depth, out, truncated);
        }
    }
}

/// Copy `item` and set both `Type` and `type` to `type_name`.
///
/// Non-object items become an object holding only the type tag.
fn tag_with_type(item: &Value, type_name: &str) -> Value {
    let mut map = item.as_object().cloned().unwrap_or_else(Map::new);
    map.insert("Type".to_string(), Value::String(type_name.to_string()));
    map.insert("type".to_string(), Value::String(type_name.to_string()));
    Value::Object(map)
}
