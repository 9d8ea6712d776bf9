//! Raw manifest entry → [`ObjectDescriptor`].
//!
//! Pure and infallible: absent or misshapen data becomes `None` or an empty
//! collection. Member extraction depends on the declared kind:
//!
//! - `Table` / `TableExtension`: fields are harvested from `Fields`, `fields`
//!   and `Members`, accepting anything that looks like a field, then
//!   deduplicated by `(id, lowercase name)`.
//! - every other kind: `Members` entries are routed by
//!   [`classify_member`](super::classify::classify_member).
//!
//! Dedicated `Controls`, `Actions` and `Keys` arrays are merged in for all
//! kinds, since some manifest shapes keep page controls outside `Members`.

use rustc_hash::FxHashSet;
use serde_json::Value;
use tracing::trace;

use super::aliases;
use super::classify::{MemberCategory, classify_member, is_field_kind, is_flowfield_class};
use super::properties::collect_properties;
use super::types::{
    ActionDescriptor, ControlDescriptor, EnumValueDescriptor, ExtensionTarget, FieldDescriptor,
    KeyDescriptor, ObjectDescriptor, RelationReference,
};
use crate::core::json::{
    is_truthy, property, property_string, scalar_to_string, try_array, try_keys, try_number,
    try_string,
};
use crate::core::text_utils::trim_layout_quotes;

/// Normalize one manifest entry.
///
/// A non-object input yields an `Undefined` descriptor with no members.
pub fn normalize(raw: &Value) -> ObjectDescriptor {
    if !raw.is_object() {
        trace!("normalize: non-object manifest entry, producing empty descriptor");
        return ObjectDescriptor::new("", "");
    }

    let declared_kind = try_string(raw, aliases::KIND).unwrap_or_default();
    let mut object = ObjectDescriptor::new(
        declared_kind.as_str(),
        try_string(raw, aliases::NAME).unwrap_or_default(),
    );
    object.id = try_number(raw, aliases::ID);
    object.caption = try_string(raw, aliases::CAPTION);

    let members = try_array(raw, aliases::MEMBERS)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if is_table_kind(&declared_kind) {
        object.fields = extract_table_fields(raw, members);
    } else {
        route_members(members, &mut object);
    }
    merge_dedicated_collections(raw, &mut object);

    object.relations = object
        .fields
        .iter()
        .filter_map(|f| {
            f.relation
                .as_ref()
                .map(|rel| RelationReference::new(f.name.clone(), rel.clone()))
        })
        .collect();

    object.properties = collect_properties(raw, &declared_kind);
    object.reference_source = try_string(raw, aliases::REFERENCE_SOURCE);
    object.source_text = embedded_source(raw, object.reference_source.as_deref());

    if declared_kind.eq_ignore_ascii_case("tableextension") {
        object.extends_target =
            try_keys(raw, aliases::TABLE_EXTENSION_TARGET).and_then(ExtensionTarget::from_value);
    }

    if declared_kind.eq_ignore_ascii_case("report") {
        object.rdlc_layout = layout_path(raw, aliases::RDLC_LAYOUT);
        object.word_layout = layout_path(raw, aliases::WORD_LAYOUT);
    }

    trace!(
        "normalize: {} {:?} '{}' fields={} keys={} controls={} actions={} values={}",
        object.kind,
        object.id,
        object.name,
        object.fields.len(),
        object.keys.len(),
        object.controls.len(),
        object.actions.len(),
        object.values.len()
    );
    object
}

fn is_table_kind(kind: &str) -> bool {
    kind.eq_ignore_ascii_case("table") || kind.eq_ignore_ascii_case("tableextension")
}

// ============================================================================
// MEMBER EXTRACTION
// ============================================================================

/// Id, name and caption shared by every member shape.
struct MemberBase {
    id: Option<i64>,
    name: String,
    caption: Option<String>,
}

impl MemberBase {
    fn read(member: &Value) -> Self {
        Self {
            id: try_number(member, aliases::MEMBER_ID),
            name: try_string(member, aliases::MEMBER_NAME).unwrap_or_default(),
            caption: try_string(member, aliases::CAPTION),
        }
    }
}

fn member_kind(member: &Value) -> String {
    try_string(member, aliases::KIND).unwrap_or_default()
}

/// Declared data type: `TypeDefinition.Name`, else `Type`/`type`.
fn field_type(member: &Value) -> Option<String> {
    try_keys(member, aliases::TYPE_DEFINITION)
        .and_then(|def| try_string(def, aliases::MEMBER_NAME))
        .or_else(|| try_string(member, aliases::MEMBER_TYPE))
}

fn read_field(member: &Value) -> FieldDescriptor {
    let base = MemberBase::read(member);
    let flowfield = property_string(member, aliases::FIELD_CLASS)
        .is_some_and(|class| is_flowfield_class(&class))
        || property(member, aliases::CALC_FORMULA).is_some_and(is_truthy);
    FieldDescriptor {
        id: base.id,
        name: base.name,
        caption: base.caption,
        field_type: field_type(member),
        relation: property_string(member, aliases::RELATION),
        flowfield,
    }
}

/// A table member counts as a field if its kind says so, or if it has both
/// a name and something type-like.
fn looks_like_field(member: &Value) -> bool {
    is_field_kind(&member_kind(member))
        || (try_keys(member, aliases::MEMBER_NAME).is_some()
            && try_keys(member, &["TypeDefinition", "Type", "type"]).is_some())
}

fn extract_table_fields(raw: &Value, members: &[Value]) -> Vec<FieldDescriptor> {
    let sources = [
        raw.get("Fields").and_then(Value::as_array).map(Vec::as_slice),
        raw.get("fields").and_then(Value::as_array).map(Vec::as_slice),
        Some(members),
    ];

    let mut seen = FxHashSet::default();
    sources
        .into_iter()
        .flatten()
        .flatten()
        .filter(|member| looks_like_field(member))
        .map(read_field)
        .filter(|field| seen.insert((field.id, field.name.to_lowercase())))
        .collect()
}

fn route_members(members: &[Value], object: &mut ObjectDescriptor) {
    for member in members {
        let kind = member_kind(member);
        let Some(category) = classify_member(&kind) else {
            trace!("normalize: unclassified member kind '{}'", kind);
            continue;
        };
        match category {
            MemberCategory::Field => object.fields.push(read_field(member)),
            MemberCategory::Action => object.actions.push(read_action(member)),
            MemberCategory::Key => object.keys.push(read_key(member)),
            MemberCategory::Control => {
                let base = MemberBase::read(member);
                object.controls.push(ControlDescriptor {
                    id: base.id,
                    name: base.name,
                    caption: base.caption,
                    subtype: try_string(member, aliases::CONTROL_SUBTYPE),
                });
            }
            MemberCategory::EnumValue => {
                let base = MemberBase::read(member);
                object.values.push(EnumValueDescriptor {
                    id: base.id,
                    name: base.name,
                    caption: base.caption,
                });
            }
        }
    }
}

fn read_action(member: &Value) -> ActionDescriptor {
    let base = MemberBase::read(member);
    ActionDescriptor {
        id: base.id,
        name: base.name,
        caption: base.caption,
    }
}

fn read_key(member: &Value) -> KeyDescriptor {
    let base = MemberBase::read(member);
    KeyDescriptor {
        id: base.id,
        name: base.name,
        caption: base.caption,
        fields: key_fields(member),
    }
}

/// Key field names from a list of names, a list of named objects, or a
/// comma-separated string.
fn key_fields(member: &Value) -> Vec<String> {
    match try_keys(member, aliases::KEY_FIELDS) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(_) => try_string(item, aliases::MEMBER_NAME),
                other => scalar_to_string(other),
            })
            .collect(),
        Some(Value::String(list)) => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn merge_dedicated_collections(raw: &Value, object: &mut ObjectDescriptor) {
    if let Some(controls) = try_array(raw, aliases::CONTROLS) {
        object.controls.extend(controls.iter().map(|control| {
            let base = MemberBase::read(control);
            ControlDescriptor {
                id: base.id,
                name: base.name,
                caption: base.caption,
                subtype: try_keys(control, aliases::TYPE_DEFINITION)
                    .and_then(|def| try_string(def, aliases::MEMBER_NAME))
                    .or_else(|| try_string(control, aliases::CONTROL_SUBTYPE)),
            }
        }));
    }
    if let Some(actions) = try_array(raw, aliases::ACTIONS) {
        object.actions.extend(actions.iter().map(read_action));
    }
    if let Some(keys) = try_array(raw, aliases::KEYS) {
        object.keys.extend(keys.iter().map(read_key));
    }
}

// ============================================================================
// SOURCE AND LAYOUTS
// ============================================================================

/// Embedded source text. `Source` doubles as a file-name alias in some
/// manifests, so a value equal to the reference source path is not text.
fn embedded_source(raw: &Value, reference_source: Option<&str>) -> Option<String> {
    aliases::SOURCE_TEXT
        .iter()
        .filter_map(|key| raw.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty() && Some(*text) != reference_source)
        .map(str::to_string)
}

fn layout_path(raw: &Value, names: &[&str]) -> Option<String> {
    property(raw, names)
        .and_then(Value::as_str)
        .map(trim_layout_quotes)
}
