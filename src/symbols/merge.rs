//! Fold `TableExtension` members into their base `Table`.
//!
//! Extensions are additive: their fields, keys and relations are appended to
//! the base table's lists with no deduplication, and the extension object
//! itself is left untouched. Running the merge twice appends twice, so call
//! it exactly once per object set.

use tracing::{debug, trace};

use super::index::TableIndex;
use super::types::{ExtensionTarget, ObjectDescriptor};
use crate::core::text_utils::strip_double_quotes;

/// Merge every resolvable `TableExtension` into its base table in place.
///
/// Returns the number of extensions merged. Extensions whose target does not
/// resolve are skipped silently.
pub fn merge_extensions(objects: &mut [ObjectDescriptor]) -> usize {
    let index = TableIndex::build(objects);

    let plan: Vec<(usize, usize)> = objects
        .iter()
        .enumerate()
        .filter(|(_, object)| object.is_kind("TableExtension"))
        .filter_map(|(pos, extension)| {
            let target = extension_target(extension)?;
            match resolve_target(&index, &target) {
                Some(base) => Some((base, pos)),
                None => {
                    trace!(
                        "merge: extension '{}' targets unknown table '{}'",
                        extension.name, target
                    );
                    None
                }
            }
        })
        .collect();

    for &(base, extension) in &plan {
        let ext = &objects[extension];
        let (fields, keys, relations) =
            (ext.fields.clone(), ext.keys.clone(), ext.relations.clone());
        debug!(
            "merge: {} field(s), {} key(s) from '{}' into '{}'",
            fields.len(),
            keys.len(),
            ext.name,
            objects[base].name
        );
        let table = &mut objects[base];
        table.fields.extend(fields);
        table.keys.extend(keys);
        table.relations.extend(relations);
    }

    plan.len()
}

/// The declared target, else the first property whose key mentions "target".
pub fn extension_target(extension: &ObjectDescriptor) -> Option<ExtensionTarget> {
    extension.extends_target.clone().or_else(|| {
        extension
            .properties
            .iter()
            .find(|p| p.key.to_lowercase().contains("target"))
            .and_then(|p| ExtensionTarget::from_value(&p.val))
    })
}

/// Ids resolve by id; names resolve by name, then as a numeric id.
fn resolve_target(index: &TableIndex, target: &ExtensionTarget) -> Option<usize> {
    match target {
        ExtensionTarget::Id(id) => index.by_id(*id),
        ExtensionTarget::Name(name) => index.by_name(name).or_else(|| {
            strip_double_quotes(name)
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|id| index.by_id(id))
        }),
    }
}
