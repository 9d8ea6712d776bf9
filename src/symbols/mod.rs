//! Symbol normalization - raw manifest JSON to canonical object descriptors.
//!
//! # Module structure
//!
//! - [`types`] - `ObjectDescriptor` and member descriptors
//! - [`aliases`] - ordered key aliases for every manifest attribute
//! - [`classify`] - member kind classification rules
//! - [`normalize`] - one manifest entry → one descriptor
//! - [`properties`] - properties-panel metadata per object kind
//! - [`sections`] - per-type section harvesting (`Tables`, `Pages`, ...)
//! - [`manifest`] - strategy selection and whole-manifest normalization
//! - [`index`] - table lookup by name and id
//! - [`merge`] - `TableExtension` → base `Table` merging
//! - [`group`] - grouping by object type

pub mod aliases;
pub mod classify;
mod group;
mod index;
mod manifest;
mod merge;
mod normalize;
mod properties;
mod sections;
mod types;


pub use classify::{MemberCategory, classify_member};
pub use group::{Group, group_by_type};
pub use index::TableIndex;
pub use manifest::{collect_symbol_arrays, normalize_manifest};
pub use merge::{extension_target, merge_extensions};
pub use normalize::normalize;
pub use properties::collect_properties;
pub use sections::{SECTIONS, extract_known_sections};
pub use types::{
    ActionDescriptor, ControlDescriptor, EnumValueDescriptor, ExtensionTarget, FieldDescriptor,
    KeyDescriptor, ObjectDescriptor, Property, RelationReference, UNDEFINED_KIND,
};
