use al_explorer::symbols::{
    ExtensionTarget, FieldDescriptor, ObjectDescriptor, merge_extensions, normalize_manifest,
};
use rstest::rstest;

use crate::helpers::manifest_fixtures::sales_manifest;

fn base_with_three_fields() -> ObjectDescriptor {
    ObjectDescriptor::new("Table", "Loyalty Card")
        .with_id(50000)
        .with_field(FieldDescriptor::new(Some(1), "Card No."))
        .with_field(FieldDescriptor::new(Some(2), "Holder"))
        .with_field(FieldDescriptor::new(Some(3), "Points"))
}

fn extension(target: impl Into<ExtensionTarget>) -> ObjectDescriptor {
    ObjectDescriptor::new("TableExtension", "Loyalty Card Ext")
        .with_id(50100)
        .with_target(target)
        .with_field(FieldDescriptor::new(Some(50100), "Tier"))
        .with_field(FieldDescriptor::new(Some(50101), "Expires"))
}

fn names(object: &ObjectDescriptor) -> Vec<&str> {
    object.fields.iter().map(|f| f.name.as_str()).collect()
}

#[rstest]
#[case(ExtensionTarget::Id(50000))]
#[case(ExtensionTarget::from("Loyalty Card"))]
#[case(ExtensionTarget::from("\"LOYALTY CARD\""))]
#[case(ExtensionTarget::from("50000"))]
fn test_extension_fields_appended_after_base(#[case] target: ExtensionTarget) {
    let mut objects = vec![base_with_three_fields(), extension(target)];
    assert_eq!(merge_extensions(&mut objects), 1);
    assert_eq!(
        names(&objects[0]),
        vec!["Card No.", "Holder", "Points", "Tier", "Expires"]
    );
}

#[rstest]
#[case(ExtensionTarget::Id(99999))]
#[case(ExtensionTarget::from("Unknown Table"))]
fn test_unresolved_extension_is_left_alone(#[case] target: ExtensionTarget) {
    let mut objects = vec![base_with_three_fields(), extension(target)];
    let before = objects.clone();
    assert_eq!(merge_extensions(&mut objects), 0);
    assert_eq!(objects, before);
    assert_eq!(objects[1].fields.len(), 2);
}

#[test]
fn test_redeclared_field_is_not_deduplicated() {
    let mut ext = extension(50000);
    ext.fields.push(FieldDescriptor::new(Some(2), "Holder"));
    let mut objects = vec![base_with_three_fields(), ext];
    merge_extensions(&mut objects);
    let holders = objects[0].fields.iter().filter(|f| f.name == "Holder").count();
    assert_eq!(holders, 2);
    assert_eq!(objects[0].fields.len(), 6);
}

#[test]
fn test_extension_only_targets_tables() {
    let page = ObjectDescriptor::new("Page", "Loyalty Card").with_id(50000);
    let mut objects = vec![page, extension(50000)];
    assert_eq!(merge_extensions(&mut objects), 0);
    assert!(objects[0].fields.is_empty());
}

#[test]
fn test_manifest_extension_merges_relations() {
    let mut objects = normalize_manifest(&sales_manifest(), 64);
    assert_eq!(merge_extensions(&mut objects), 1);
    let customer = &objects[0];
    assert_eq!(customer.fields.len(), 5);
    let relation_fields: Vec<_> = customer.relations.iter().map(|r| r.field.as_str()).collect();
    assert_eq!(relation_fields, vec!["Salesperson Code", "Region"]);
}
