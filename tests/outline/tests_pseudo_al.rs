use al_explorer::outline::{OutlineOptions, generate_pseudo_al, generate_pseudo_al_with};
use al_explorer::symbols::{FieldDescriptor, ObjectDescriptor, normalize_manifest};

use crate::helpers::manifest_fixtures::sales_manifest;

#[test]
fn test_customer_outline() {
    let customer = ObjectDescriptor::new("Table", "Customer")
        .with_id(18)
        .with_field(FieldDescriptor::new(Some(1), "No."));
    let text = generate_pseudo_al(&customer);
    assert!(text.contains("table 18 \"Customer\""));
    assert!(text.contains("field(1; \"No.\")"));
}

#[test]
fn test_outlines_for_manifest_objects() {
    let objects = normalize_manifest(&sales_manifest(), 64);
    let outline = |name: &str| {
        let object = objects.iter().find(|o| o.name == name).unwrap();
        generate_pseudo_al(object)
    };

    let table = outline("Demo Customer");
    assert!(table.contains("    field(3; \"Salesperson Code\") Code {}"));
    assert!(table.contains("    key(PK; \"No.\") {}"));

    let page = outline("Demo Customer Card");
    assert!(page.starts_with("page 50000 \"Demo Customer Card\""));
    assert!(page.contains("    group(; General) {}"));
    assert!(page.contains("    field(; \"No.\") {}"));
    assert!(page.contains("    action(; Post) {}"));

    let enumeration = outline("Demo Status");
    assert!(enumeration.contains("  value(1; Open) {}"));
    assert!(enumeration.contains("  value(2; Closed) {}"));

    let report = outline("Demo Statement");
    assert!(report.starts_with("report 50000 \"Demo Statement\""));
    assert!(report.contains("// Outline only"));
}

#[test]
fn test_missing_source_note() {
    let object = ObjectDescriptor::new("Codeunit", "Sales-Post").with_id(80);
    let plain = generate_pseudo_al(&object);
    let noted = generate_pseudo_al_with(
        &object,
        &OutlineOptions::default().with_missing_source_note(true),
    );
    assert!(noted.starts_with(&plain));
    assert!(noted.contains("ShowMyCode"));
    assert!(!plain.contains("ShowMyCode"));
}
