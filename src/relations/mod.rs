//! Relation expressions and the table relationship graphs built from them.

mod graph;
mod parse;

pub use graph::{
    GraphField, RelationGraph, RelationGraphEdge, RelationGraphNode, build_global_relation_graph,
    build_relation_graph,
};
pub use parse::{FieldMapping, TableRelation, parse_table_relation};
