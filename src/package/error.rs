//! Error types for package reading.

use thiserror::Error;

/// Errors that can occur while reading an app package.
///
/// Only archive and manifest level failures are errors; everything past the
/// manifest degrades to partial results instead.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The archive holds no entry that looks like a symbol manifest.
    #[error("SymbolReferences.json not found in app package")]
    ManifestNotFound,

    /// The manifest text is not valid JSON.
    #[error("Invalid manifest JSON: {0}")]
    InvalidJson(String),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Archive(String),

    /// IO error while reading a package file or entry.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No report layout entry matched the requested paths.
    #[error("Layout file not found in package: {0}")]
    LayoutNotFound(String),
}

impl PackageError {
    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create an invalid JSON error.
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson(message.into())
    }

    /// Whether the package itself could not be read, as opposed to a
    /// missing optional resource.
    pub fn is_unreadable_package(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound | Self::InvalidJson(_) | Self::Archive(_) | Self::Io(_)
        )
    }
}
