//! Attach `.al` source files shipped inside a package to their objects.
//!
//! Packages built with `ShowMyCode` enabled carry the object sources. Each
//! object is matched by the file name of its reference source, falling back
//! to `<object name>.al`.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::archive::PackageArchive;
use crate::core::text_utils::{basename, strip_bom, strip_double_quotes};
use crate::symbols::ObjectDescriptor;

/// Lowercase file name → source text for every `.al` entry.
///
/// Entries that cannot be read are skipped.
pub fn build_source_map(archive: &mut PackageArchive) -> FxHashMap<String, String> {
    let al_entries: Vec<String> = archive
        .entry_names()
        .iter()
        .filter(|name| name.to_lowercase().ends_with(".al"))
        .cloned()
        .collect();

    let mut map = FxHashMap::default();
    for entry in al_entries {
        match archive.read_text(&entry) {
            Ok(text) => {
                map.insert(basename(&entry).to_lowercase(), strip_bom(&text).to_string());
            }
            Err(e) => trace!("sources: skipping '{}': {}", entry, e),
        }
    }
    map
}

/// Fill `source_text` on objects that lack it. Returns how many were filled.
pub fn attach_sources(
    objects: &mut [ObjectDescriptor],
    sources: &FxHashMap<String, String>,
) -> usize {
    if sources.is_empty() {
        return 0;
    }

    let mut attached = 0;
    for object in objects.iter_mut().filter(|o| o.source_text.is_none()) {
        let by_reference = object
            .reference_source
            .as_deref()
            .map(|path| basename(path).to_lowercase())
            .filter(|key| !key.is_empty())
            .and_then(|key| sources.get(&key));
        let by_name = || {
            if object.name.is_empty() {
                return None;
            }
            let key = format!("{}.al", strip_double_quotes(&object.name)).to_lowercase();
            sources.get(&key)
        };

        if let Some(text) = by_reference.or_else(by_name) {
            object.source_text = Some(text.clone());
            attached += 1;
        }
    }
    debug!("Attached source text to {} object(s)", attached);
    attached
}
