//! Normalized object model produced from symbol manifests.
//!
//! Every manifest entry, whatever its original shape, becomes one
//! [`ObjectDescriptor`]. Collections are always present (possibly empty),
//! and the object kind is never empty (`"Undefined"` when unknown).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind assigned to objects whose manifest entry declares none.
pub const UNDEFINED_KIND: &str = "Undefined";

// ============================================================================
// OBJECT DESCRIPTOR
// ============================================================================

/// Canonical representation of one application object (table, page, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDescriptor {
    /// Declared kind (`Table`, `Page`, `TableExtension`, `EnumType`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Object id; `None` for kinds without ids (interfaces, profiles, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub keys: Vec<KeyDescriptor>,
    #[serde(default)]
    pub controls: Vec<ControlDescriptor>,
    #[serde(default)]
    pub actions: Vec<ActionDescriptor>,
    #[serde(default)]
    pub values: Vec<EnumValueDescriptor>,
    /// One entry per field carrying a relation expression (unparsed).
    #[serde(default)]
    pub relations: Vec<RelationReference>,
    /// Display metadata, never containing null or empty values.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Procedural source, either embedded or attached from the archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    /// Path of the `.al` file this object was compiled from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_source: Option<String>,
    /// Base table of a `TableExtension`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends_target: Option<ExtensionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdlc_layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_layout: Option<String>,
}

impl ObjectDescriptor {
    /// Create an empty descriptor of the given kind.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            kind: if kind.is_empty() {
                UNDEFINED_KIND.to_string()
            } else {
                kind
            },
            id: None,
            name: name.into(),
            caption: None,
            fields: Vec::new(),
            keys: Vec::new(),
            controls: Vec::new(),
            actions: Vec::new(),
            values: Vec::new(),
            relations: Vec::new(),
            properties: Vec::new(),
            source_text: None,
            reference_source: None,
            extends_target: None,
            rdlc_layout: None,
            word_layout: None,
        }
    }

    /// Set the object id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Append a field, recording its relation when it has one.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        if let Some(relation) = &field.relation {
            self.relations
                .push(RelationReference::new(field.name.clone(), relation.clone()));
        }
        self.fields.push(field);
        self
    }

    /// Append a key.
    pub fn with_key(mut self, key: KeyDescriptor) -> Self {
        self.keys.push(key);
        self
    }

    /// Set the extension target.
    pub fn with_target(mut self, target: impl Into<ExtensionTarget>) -> Self {
        self.extends_target = Some(target.into());
        self
    }

    /// Exact kind comparison (`"Table"` does not match `"table"`).
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Total number of members listed under this object.
    pub fn member_count(&self) -> usize {
        self.fields.len()
            + self.keys.len()
            + self.controls.len()
            + self.actions.len()
            + self.values.len()
    }

    /// Display name: the name, or `Object <id>`, or `Unnamed`.
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if !trimmed.is_empty() {
            trimmed.to_string()
        } else if let Some(id) = self.id {
            format!("Object {id}")
        } else {
            "Unnamed".to_string()
        }
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

/// A table field (or a page/query column classified as a field).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Raw relation expression, e.g. `Customer WHERE("No."=FIELD("Bill-to No."))`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    /// Computed from a formula rather than stored.
    #[serde(default)]
    pub flowfield: bool,
}

impl FieldDescriptor {
    pub fn new(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    pub fn flowfield(mut self) -> Self {
        self.flowfield = true;
        self
    }
}

/// A table key; `fields` lists the key's field names in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl KeyDescriptor {
    pub fn new(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            id: None,
            name: name.into(),
            caption: None,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A page layout control (field, group, part, repeater, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// A page or report action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// An enum value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumValueDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

// ============================================================================
// RELATIONS, PROPERTIES, TARGETS
// ============================================================================

/// A field's relation expression, kept unparsed until a graph needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationReference {
    pub field: String,
    pub relation: String,
}

impl RelationReference {
    pub fn new(field: impl Into<String>, relation: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            relation: relation.into(),
        }
    }
}

/// One row of the properties panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub val: Value,
}

/// The object a `TableExtension` extends: by id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionTarget {
    Id(i64),
    Name(String),
}

impl ExtensionTarget {
    /// Convert a manifest value; falsy and non-scalar values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().filter(|id| *id != 0).map(Self::Id),
            Value::String(s) if !s.is_empty() => Some(Self::Name(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for ExtensionTarget {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ExtensionTarget {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl std::fmt::Display for ExtensionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}
