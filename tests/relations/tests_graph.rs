use al_explorer::relations::{
    FieldMapping, RelationGraphEdge, RelationGraphNode, build_global_relation_graph,
    build_relation_graph,
};
use al_explorer::symbols::{FieldDescriptor, ObjectDescriptor, merge_extensions, normalize_manifest};
use serde_json::json;

use crate::helpers::manifest_fixtures::sales_manifest;

fn table(name: &str) -> ObjectDescriptor {
    ObjectDescriptor::new("Table", name)
}

#[test]
fn test_global_graph_two_tables() {
    let all = vec![
        table("A").with_field(
            FieldDescriptor::new(Some(1), "f").with_relation("B WHERE(Id = FIELD(f))"),
        ),
        table("B"),
    ];
    let graph = build_global_relation_graph(&all);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(
        graph.edges,
        vec![RelationGraphEdge {
            from: "A".to_string(),
            to: "B".to_string(),
            via_field: "f".to_string(),
            mappings: vec![FieldMapping::new("Id", "f")],
        }]
    );
}

#[test]
fn test_centered_graph_from_manifest() {
    let mut objects = normalize_manifest(&sales_manifest(), 64);
    merge_extensions(&mut objects);

    let graph = build_relation_graph(&objects[0], &objects);
    assert_eq!(graph.center_name, "Demo Customer");
    let node_names: Vec<_> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(node_names, vec!["Demo Customer", "Demo Salesperson"]);
    assert_eq!(graph.nodes[0].keys, vec!["No."]);
    assert_eq!(graph.nodes[0].fields.len(), 5);
    // "Demo Region" is not a table in the package
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].via_field, "Salesperson Code");
}

#[test]
fn test_multiple_fields_to_same_table() {
    let center = table("Transfer")
        .with_field(FieldDescriptor::new(Some(1), "From").with_relation("Location"))
        .with_field(FieldDescriptor::new(Some(2), "To").with_relation("\"location\""))
        .with_field(FieldDescriptor::new(Some(3), "Via").with_relation("Location"));
    let all = vec![center.clone(), table("Location")];
    let graph = build_relation_graph(&center, &all);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 3);
    assert!(graph.edges.iter().all(|e| e.from == "Transfer" && e.to == "Location"));
}

#[test]
fn test_global_graph_ignores_non_tables_as_sources() {
    let all = vec![
        ObjectDescriptor::new("TableExtension", "Ext")
            .with_field(FieldDescriptor::new(Some(1), "x").with_relation("B")),
        table("B"),
    ];
    let graph = build_global_relation_graph(&all);
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}

#[test]
fn test_node_from_stored_descriptor() {
    let stored = serde_json::to_value(
        table("Customer")
            .with_id(18)
            .with_field(FieldDescriptor::new(Some(1), "No.").with_type("Code"))
            .with_field(FieldDescriptor::new(Some(2), "Balance").with_type("Decimal").flowfield()),
    )
    .unwrap();
    let node = RelationGraphNode::from_json(&stored);
    assert_eq!(node.id, Some(18));
    assert_eq!(node.name, "Customer");
    assert_eq!(node.fields.len(), 2);
    assert_eq!(node.fields[0].field_type, "Code");
    assert!(node.fields[1].flowfield);

    let legacy = json!({ "name": "Old", "fields": { "fields": [{ "fieldName": "A", "dataType": "Integer" }] } });
    assert_eq!(RelationGraphNode::from_json(&legacy).fields[0].name, "A");
}
