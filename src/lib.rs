//! # al-explorer-base
//!
//! Core library for reading Business Central app packages: symbol manifest
//! normalization, table extension merging, and table relationship graphs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! outline    → Pseudo-source outlines, object list filters
//!   ↓
//! relations  → Relation expression parser, relationship graphs
//!   ↓
//! symbols    → Object descriptors, normalizer, section harvesting, merging
//!   ↓
//! package    → Archive reader, source attachment, report layouts
//!   ↓
//! core       → Tolerant JSON accessors, text helpers
//! ```
//!
//! ## Example
//!
//! ```
//! use al_explorer::{group_by_type, parse_package};
//!
//! let manifest = r#"{
//!     "Tables": [{ "Id": 18, "Name": "Customer" }],
//!     "Pages": [{ "Id": 21, "Name": "Customer Card" }]
//! }"#;
//! let package = parse_package(manifest).unwrap();
//! let groups = group_by_type(&package.objects);
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].kind, "Table");
//! ```

// ============================================================================
// MODULES (dependency order: core → package → symbols → relations → outline)
// ============================================================================

/// Foundation helpers: tolerant JSON access, identifier and path text
pub mod core;

/// App package reading: archive, manifest, sources, layouts
pub mod package;

/// Symbol normalization: descriptors, harvesting, extension merging, grouping
pub mod symbols;

/// Relation expressions and table relationship graphs
pub mod relations;

/// Pseudo-source outlines and object list filters
pub mod outline;

// Re-export the main entry points
pub use outline::{ObjectFilter, OutlineOptions, generate_pseudo_al, generate_pseudo_al_with};
pub use package::{
    AppInfo, PackageArchive, PackageError, ParseOptions, ParsedPackage, ReportLayout,
    parse_package, parse_package_with, read_package_file,
};
pub use relations::{
    RelationGraph, TableRelation, build_global_relation_graph, build_relation_graph,
    parse_table_relation,
};
pub use symbols::{ObjectDescriptor, group_by_type, merge_extensions, normalize};
