use al_explorer::symbols::{
    UNDEFINED_KIND, collect_symbol_arrays, extract_known_sections, group_by_type,
    normalize_manifest,
};
use rstest::rstest;
use serde_json::{Value, json};

use crate::helpers::manifest_fixtures::{sales_manifest, sectioned_manifest};

fn kinds(raw: &Value) -> Vec<String> {
    normalize_manifest(raw, 64)
        .into_iter()
        .map(|o| o.kind)
        .collect()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(250)]
fn test_symbols_array_count_is_preserved(#[case] n: usize) {
    let symbols: Vec<Value> = (0..n)
        .map(|i| match i % 4 {
            0 => json!({ "Type": "Table", "Id": i + 1, "Name": format!("T{i}") }),
            1 => json!({ "Type": "Page", "Name": format!("P{i}") }),
            2 => json!({ "Name": format!("Untyped{i}") }),
            _ => json!(null),
        })
        .collect();
    let raw = json!({ "Symbols": symbols });
    assert_eq!(normalize_manifest(&raw, 64).len(), n);
}

#[test]
fn test_nested_symbols_arrays_are_concatenated() {
    let raw = json!({
        "Runtime": { "Symbols": [{ "Type": "Table", "Name": "A" }] },
        "Dependencies": [
            { "objects": [{ "Type": "Page", "Name": "B" }, { "Type": "Codeunit", "Name": "C" }] }
        ]
    });
    assert_eq!(collect_symbol_arrays(&raw, 64).len(), 2);
    assert_eq!(kinds(&raw), vec!["Table", "Page", "Codeunit"]);
}

#[test]
fn test_sections_with_nested_namespaces() {
    let raw = sectioned_manifest();
    assert!(collect_symbol_arrays(&raw, 64).is_empty());
    assert_eq!(
        kinds(&raw),
        vec!["Table", "Codeunit", "Page", "EnumType"]
    );
}

#[test]
fn test_mixed_shapes_run_only_the_symbols_strategy() {
    let raw = json!({
        "Tables": [{ "Id": 18, "Name": "Customer" }],
        "Objects": [{ "Type": "Query", "Name": "Top Customers" }]
    });
    assert_eq!(kinds(&raw), vec!["Query"]);
}

#[test]
fn test_sections_tag_items_with_type() {
    let raw = json!({ "EnumTypes": [{ "Name": "Status" }], "Interfaces": ["not an object"] });
    let items = extract_known_sections(&raw, 64);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["Type"], "EnumType");
    assert_eq!(items[1]["Type"], "Interface");
}

#[test]
fn test_untyped_symbols_are_undefined() {
    let raw = json!({ "Symbols": [{ "Name": "Loose" }] });
    assert_eq!(kinds(&raw), vec![UNDEFINED_KIND]);
}

#[test]
fn test_grouping_is_a_partition() {
    let objects = normalize_manifest(&sales_manifest(), 64);
    let groups = group_by_type(&objects);

    let grouped: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(grouped, objects.len());
    for group in &groups {
        assert!(group.items.iter().all(|o| o.kind == group.kind));
    }
    assert_eq!(
        groups.iter().map(|g| g.kind).collect::<Vec<_>>(),
        vec!["Table", "TableExtension", "Page", "Enum", "Report"]
    );
}

#[test]
fn test_renormalizing_is_stable() {
    let raw = sales_manifest();
    assert_eq!(normalize_manifest(&raw, 64), normalize_manifest(&raw, 64));
}
