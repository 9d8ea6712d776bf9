//! Partition objects by declared type.

use indexmap::IndexMap;
use serde::Serialize;

use super::types::{ObjectDescriptor, UNDEFINED_KIND};

/// All objects of one type, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub items: Vec<&'a ObjectDescriptor>,
}

impl Group<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group objects by `kind`, groups ordered by first appearance.
pub fn group_by_type(objects: &[ObjectDescriptor]) -> Vec<Group<'_>> {
    let mut by_type: IndexMap<&str, Vec<&ObjectDescriptor>> = IndexMap::new();
    for object in objects {
        let kind = if object.kind.is_empty() {
            UNDEFINED_KIND
        } else {
            object.kind.as_str()
        };
        by_type.entry(kind).or_default().push(object);
    }
    by_type
        .into_iter()
        .map(|(kind, items)| Group { kind, items })
        .collect()
}
