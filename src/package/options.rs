//! Package parsing options

use serde::Deserialize;

/// Options controlling what [`parse_package_with`](super::parse_package_with)
/// does after the manifest is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Attach `.al` sources found in the archive to objects without source
    pub attach_sources: bool,
    /// Fold table extensions into their base tables
    pub merge_extensions: bool,
    /// Nesting limit for manifest walks
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            attach_sources: true,
            merge_extensions: true,
            max_depth: 64,
        }
    }
}

impl ParseOptions {
    pub fn with_attach_sources(mut self, attach: bool) -> Self {
        self.attach_sources = attach;
        self
    }

    pub fn with_merge_extensions(mut self, merge: bool) -> Self {
        self.merge_extensions = merge;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
