//! Ordered key aliases for every logical manifest attribute.
//!
//! Order matters: lookups return the first match, so PascalCase spellings
//! (the compiler's current output) come before camelCase and legacy names.

pub const KIND: &[&str] = &["Kind", "kind", "Type", "type"];
pub const ID: &[&str] = &["Id", "id", "ObjectId", "objectId"];
pub const NAME: &[&str] = &["Name", "name", "ObjectName", "objectName"];
pub const CAPTION: &[&str] = &["Caption", "caption"];
pub const MEMBERS: &[&str] = &["Members", "members"];

pub const MEMBER_ID: &[&str] = &["Id", "id"];
pub const MEMBER_NAME: &[&str] = &["Name", "name"];
pub const TYPE_DEFINITION: &[&str] = &["TypeDefinition"];
pub const MEMBER_TYPE: &[&str] = &["Type", "type"];

pub const RELATION: &[&str] = &["TableRelation", "tableRelation", "Relation", "relation"];
pub const FIELD_CLASS: &[&str] = &["FieldClass", "fieldClass", "Class", "class"];
pub const CALC_FORMULA: &[&str] = &["CalcFormula", "calcFormula"];
pub const KEY_FIELDS: &[&str] = &["KeyFields", "Fields", "FieldNames"];
pub const CONTROL_SUBTYPE: &[&str] = &["SubType", "subType", "ControlType", "controlType"];

pub const CONTROLS: &[&str] = &["Controls", "controls"];
pub const ACTIONS: &[&str] = &["Actions", "actions"];
pub const KEYS: &[&str] = &["Keys", "keys"];

pub const REFERENCE_SOURCE: &[&str] = &["ReferenceSourceFileName", "SourceFile", "Source"];
pub const SOURCE_TEXT: &[&str] = &["Source", "SourceText", "SourceCode", "Content"];
pub const TABLE_EXTENSION_TARGET: &[&str] = &["TargetTable", "Target", "TargetObject"];

pub const RDLC_LAYOUT: &[&str] = &["RDLCLayout", "RdlcLayout"];
pub const WORD_LAYOUT: &[&str] = &["WordLayout"];
