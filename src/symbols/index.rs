//! Name and id lookup over the `Table` objects of a descriptor slice.

use rustc_hash::FxHashMap;

use super::types::ObjectDescriptor;
use crate::core::text_utils::name_key;

/// Positions of base tables, keyed by quote-stripped lowercase name and by id.
///
/// Later tables win when two share a name or id.
#[derive(Debug, Clone, Default)]
pub struct TableIndex {
    by_name: FxHashMap<String, usize>,
    by_id: FxHashMap<i64, usize>,
}

impl TableIndex {
    /// Index every object whose kind is exactly `Table`.
    pub fn build(objects: &[ObjectDescriptor]) -> Self {
        let mut index = Self::default();
        for (pos, object) in objects.iter().enumerate() {
            if !object.is_kind("Table") {
                continue;
            }
            index.by_name.insert(name_key(&object.name), pos);
            if let Some(id) = object.id {
                index.by_id.insert(id, pos);
            }
        }
        index
    }

    /// Resolve a (possibly quoted, any-case) table name.
    pub fn by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name_key(name)).copied()
    }

    pub fn by_id(&self, id: i64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
