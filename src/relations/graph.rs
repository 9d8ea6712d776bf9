//! Table-to-table relationship graphs.
//!
//! Nodes are simplified projections of `Table` descriptors; edges come from
//! fields whose relation expression names another known table. Relations to
//! unknown tables are dropped.

use rustc_hash::FxHashSet;
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::parse::{FieldMapping, parse_table_relation};
use crate::core::json::{is_truthy, scalar_to_string, try_number, try_string};
use crate::core::text_utils::name_key;
use crate::symbols::{ObjectDescriptor, TableIndex};

// ============================================================================
// GRAPH TYPES
// ============================================================================

/// A field as shown in a diagram entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub flowfield: bool,
}

/// A table entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationGraphNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Primary key: the first declared key's field names.
    pub keys: Vec<String>,
    pub fields: Vec<GraphField>,
}

impl RelationGraphNode {
    /// Project a loosely shaped table object (e.g. a stored descriptor).
    ///
    /// Fields may be stored as `fields: [...]` or `fields: {fields: [...]}`,
    /// named by `name` or `fieldName`, typed by `type` or `dataType`.
    pub fn from_json(table: &Value) -> Self {
        let keys = table
            .get("keys")
            .and_then(Value::as_array)
            .and_then(|keys| keys.first())
            .and_then(|key| key.get("fields"))
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|f| match f {
                        Value::String(name) => Some(name.clone()),
                        other => other.get("name").and_then(scalar_to_string),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let raw_fields: &[Value] = match table.get("fields") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(container) => container
                .get("fields")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            None => &[],
        };
        let fields = raw_fields
            .iter()
            .map(|f| GraphField {
                name: try_string(f, &["name", "fieldName"]).unwrap_or_default(),
                field_type: try_string(f, &["type", "dataType"]).unwrap_or_default(),
                flowfield: ["flowfield", "isFlowField"]
                    .iter()
                    .any(|key| f.get(*key).is_some_and(is_truthy)),
            })
            .filter(|f| !f.name.is_empty())
            .collect();

        Self {
            id: try_number(table, &["id"]),
            name: try_string(table, &["name"]).unwrap_or_default(),
            keys,
            fields,
        }
    }
}

impl From<&ObjectDescriptor> for RelationGraphNode {
    fn from(table: &ObjectDescriptor) -> Self {
        Self {
            id: table.id,
            name: table.name.clone(),
            keys: table
                .keys
                .first()
                .map(|key| key.fields.clone())
                .unwrap_or_default(),
            fields: table
                .fields
                .iter()
                .filter(|f| !f.name.is_empty())
                .map(|f| GraphField {
                    name: f.name.clone(),
                    field_type: f.field_type.clone().unwrap_or_default(),
                    flowfield: f.flowfield,
                })
                .collect(),
        }
    }
}

/// A reference from one table to another through a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationGraphEdge {
    pub from: String,
    pub to: String,
    pub via_field: String,
    pub mappings: Vec<FieldMapping>,
}

/// Nodes and edges; `center_name` is empty for global graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationGraph {
    pub nodes: Vec<RelationGraphNode>,
    pub edges: Vec<RelationGraphEdge>,
    pub center_name: String,
}

impl RelationGraph {
    /// Edges leaving `name`.
    pub fn edges_from<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RelationGraphEdge> {
        self.edges.iter().filter(move |e| e.from == name)
    }
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Resolve each relation of `table` against the table index, yielding the
/// target's position and the edge.
fn resolve_edges<'a>(
    table: &'a ObjectDescriptor,
    all: &'a [ObjectDescriptor],
    index: &'a TableIndex,
) -> impl Iterator<Item = (usize, RelationGraphEdge)> + 'a {
    table.fields.iter().filter_map(move |field| {
        let relation = field.relation.as_deref()?;
        let parsed = parse_table_relation(relation);
        if parsed.target_name.is_empty() {
            return None;
        }
        let Some(target) = index.by_name(&parsed.target_name) else {
            trace!(
                "graph: dropping relation {}.{} -> unknown table '{}'",
                table.name, field.name, parsed.target_name
            );
            return None;
        };
        Some((
            target,
            RelationGraphEdge {
                from: table.name.clone(),
                to: all[target].name.clone(),
                via_field: field.name.clone(),
                mappings: parsed.mappings,
            },
        ))
    })
}

/// Graph of `selected` and every table it references.
///
/// Each referenced table gets one node however many fields point at it; a
/// self-reference adds an edge but no second node.
pub fn build_relation_graph(
    selected: &ObjectDescriptor,
    all: &[ObjectDescriptor],
) -> RelationGraph {
    let index = TableIndex::build(all);
    let center = RelationGraphNode::from(selected);
    let mut graph = RelationGraph {
        center_name: center.name.clone(),
        nodes: vec![center],
        edges: Vec::new(),
    };

    let mut added = FxHashSet::default();
    added.insert(name_key(&selected.name));
    for (target, edge) in resolve_edges(selected, all, &index) {
        if added.insert(name_key(&all[target].name)) {
            graph.nodes.push(RelationGraphNode::from(&all[target]));
        }
        graph.edges.push(edge);
    }
    graph
}

/// Graph of every `Table` object and every resolvable relation between them.
pub fn build_global_relation_graph(all: &[ObjectDescriptor]) -> RelationGraph {
    let index = TableIndex::build(all);
    let tables: Vec<&ObjectDescriptor> = all.iter().filter(|o| o.is_kind("Table")).collect();

    let nodes = tables.iter().map(|t| RelationGraphNode::from(*t)).collect();
    let edges = tables
        .iter()
        .flat_map(|&t| resolve_edges(t, all, &index).map(|(_, edge)| edge))
        .collect();

    RelationGraph {
        nodes,
        edges,
        center_name: String::new(),
    }
}
