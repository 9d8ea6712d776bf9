//! In-memory app package archive.
//!
//! An `.app` file is a ZIP archive:
//!
//! ```text
//! Publisher_App_1.0.0.0.app (ZIP archive)
//! ├── SymbolReferences.json     # Symbol manifest
//! ├── NavxManifest.xml          # App metadata
//! ├── src/                      # Present when ShowMyCode is enabled
//! │   └── Customer.Table.al
//! └── layouts/
//!     └── Invoice.rdlc          # Report layouts
//! ```

use super::error::PackageError;

/// An opened package with its entry list.
///
/// Entry names are kept in archive order, directories excluded.
#[derive(Debug, Clone)]
pub struct PackageArchive {
    entries: Vec<String>,
    #[cfg(feature = "archive")]
    zip: zip::ZipArchive<std::io::Cursor<Vec<u8>>>,
}

impl PackageArchive {
    pub fn entry_names(&self) -> &[String] {
        &self.entries
    }

    /// Read an entry as text, replacing invalid UTF-8.
    pub fn read_text(&mut self, name: &str) -> Result<String, PackageError> {
        let bytes = self.read_bytes(name)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

// ============================================================================
// ZIP BACKEND (requires archive feature)
// ============================================================================

#[cfg(feature = "archive")]
impl PackageArchive {
    /// Open `bytes` as a ZIP archive.
    pub fn open(bytes: Vec<u8>) -> Result<Self, PackageError> {
        use std::io::Cursor;
        use zip::ZipArchive;

        let mut zip = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| PackageError::archive(format!("Failed to open archive: {e}")))?;

        let entries = (0..zip.len())
            .filter_map(|i| {
                let file = zip.by_index(i).ok()?;
                (!file.is_dir()).then(|| file.name().to_string())
            })
            .collect();

        Ok(Self { entries, zip })
    }

    /// Read an entry's raw bytes.
    pub fn read_bytes(&mut self, name: &str) -> Result<Vec<u8>, PackageError> {
        use std::io::Read;

        let mut file = self
            .zip
            .by_name(name)
            .map_err(|e| PackageError::archive(format!("Failed to read {name}: {e}")))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }
}

#[cfg(not(feature = "archive"))]
impl PackageArchive {
    pub fn open(bytes: Vec<u8>) -> Result<Self, PackageError> {
        let _ = bytes;
        Err(PackageError::archive(
            "Package archives require the 'archive' feature",
        ))
    }

    pub fn read_bytes(&mut self, name: &str) -> Result<Vec<u8>, PackageError> {
        let _ = name;
        Err(PackageError::archive(
            "Package archives require the 'archive' feature",
        ))
    }
}
