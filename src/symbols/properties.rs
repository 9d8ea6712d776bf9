//! Properties-panel metadata collected from a raw manifest entry.

use serde_json::Value;

use super::types::Property;
use crate::core::json::is_present;

/// A display label and the manifest keys it is read from, in order.
type PropertyRow = (&'static str, &'static [&'static str]);

const COMMON: &[PropertyRow] = &[
    ("Id", &["Id", "id", "ObjectId", "objectId"]),
    ("Name", &["Name", "name", "ObjectName", "objectName"]),
    // "Type" is filled from the resolved kind, see `collect_properties`.
    ("Caption", &["Caption", "caption"]),
    ("Source File", &["ReferenceSourceFileName", "SourceFile", "Source"]),
    ("Namespace", &["Namespace", "NamespaceName"]),
    ("Application Area", &["ApplicationArea"]),
];

const TABLE: &[PropertyRow] = &[
    ("Data Classification", &["DataClassification"]),
    ("DrillDown Page Id", &["DrillDownPageId"]),
    ("Lookup Page Id", &["LookupPageId"]),
];
const PAGE: &[PropertyRow] = &[
    ("Page Type", &["PageType"]),
    ("Source Table", &["SourceTable", "SourceTableName"]),
    ("Usage Category", &["UsageCategory"]),
];
const REPORT: &[PropertyRow] = &[("Default Layout", &["DefaultLayout"])];
const CODEUNIT: &[PropertyRow] = &[
    ("Subtype", &["Subtype"]),
    ("Single Instance", &["SingleInstance"]),
];
const ENUM: &[PropertyRow] = &[("Extensible", &["Extensible"])];
const XMLPORT: &[PropertyRow] = &[("Direction", &["Direction"])];
const PERMISSION_SET: &[PropertyRow] = &[("Assignable", &["Assignable"])];
const PAGE_EXTENSION: &[PropertyRow] =
    &[("Target Page", &["TargetPage", "Target", "TargetObject"])];
const REPORT_EXTENSION: &[PropertyRow] =
    &[("Target Report", &["TargetReport", "Target", "TargetObject"])];
const PERMISSION_SET_EXTENSION: &[PropertyRow] = &[("Target", &["Target", "TargetObject"])];
const TABLE_EXTENSION: &[PropertyRow] =
    &[("Target Table", &["TargetTable", "Target", "TargetObject"])];

/// Extra properties shown for a given object kind.
fn kind_specific(kind: &str) -> &'static [PropertyRow] {
    match kind {
        "Table" => TABLE,
        "Page" => PAGE,
        "Report" => REPORT,
        "Codeunit" => CODEUNIT,
        "Enum" | "EnumType" => ENUM,
        "XmlPort" => XMLPORT,
        "PermissionSet" => PERMISSION_SET,
        "PageExtension" => PAGE_EXTENSION,
        "ReportExtension" => REPORT_EXTENSION,
        "PermissionSetExtension" => PERMISSION_SET_EXTENSION,
        "TableExtension" => TABLE_EXTENSION,
        _ => &[],
    }
}

/// Collect common and kind-specific properties for `raw`.
///
/// Each label takes the first alias holding a present value; labels with no
/// value (missing, null or empty string) are left out.
pub fn collect_properties(raw: &Value, kind: &str) -> Vec<Property> {
    let mut props = Vec::new();
    let mut push = |key: &str, val: Option<Value>| {
        if let Some(val) = val.filter(is_present) {
            props.push(Property {
                key: key.to_string(),
                val,
            });
        }
    };

    for &(label, keys) in &COMMON[..2] {
        push(label, first_present(raw, keys));
    }
    push("Type", Some(Value::String(kind.to_string())));
    for &(label, keys) in COMMON[2..].iter().chain(kind_specific(kind)) {
        push(label, first_present(raw, keys));
    }

    props
}

fn first_present(raw: &Value, keys: &[&str]) -> Option<Value> {
    let obj = raw.as_object()?;
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| is_present(v))
        .cloned()
}
