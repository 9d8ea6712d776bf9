//! App package reading: archive, manifest, sources, layouts.
//!
//! [`parse_package`] is the top-level entry point. It decodes the manifest,
//! normalizes every object, attaches shipped sources and merges table
//! extensions into their base tables:
//!
//! ```text
//! bytes ─► read_manifest ─► normalize_manifest ─► attach_sources ─► merge_extensions
//! ```

mod archive;
mod error;
mod info;
mod layout;
mod options;
mod reader;
mod sources;

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::symbols::{ObjectDescriptor, merge_extensions, normalize_manifest};

pub use archive::PackageArchive;
pub use error::PackageError;
pub use info::AppInfo;
pub use layout::{LayoutKind, ReportLayout, join_path, pretty_xml, resolve_layout_entry};
pub use options::ParseOptions;
pub use reader::{ManifestSource, find_manifest_entry, parse_manifest_text, read_manifest};
pub use sources::{attach_sources, build_source_map};

/// A decoded and normalized package.
#[derive(Debug)]
pub struct ParsedPackage {
    /// The manifest as read.
    pub raw: Value,
    /// One descriptor per manifest object, in manifest order.
    pub objects: Vec<ObjectDescriptor>,
    pub info: AppInfo,
    /// The archive, for ZIP input.
    pub archive: Option<PackageArchive>,
}

impl ParsedPackage {
    /// Load the report layout declared on `report`.
    pub fn load_report_layout(
        &mut self,
        report: &ObjectDescriptor,
    ) -> Result<ReportLayout, PackageError> {
        let archive = self
            .archive
            .as_mut()
            .ok_or_else(|| PackageError::archive("No package archive available"))?;
        archive.load_report_layout(
            report.reference_source.as_deref(),
            report.rdlc_layout.as_deref(),
            report.word_layout.as_deref(),
        )
    }
}

/// Parse package bytes (ZIP) or manifest JSON with default options.
pub fn parse_package(input: impl AsRef<[u8]>) -> Result<ParsedPackage, PackageError> {
    parse_package_with(input, &ParseOptions::default())
}

pub fn parse_package_with(
    input: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> Result<ParsedPackage, PackageError> {
    let ManifestSource { raw, mut archive } = read_manifest(input.as_ref())?;

    let mut objects = normalize_manifest(&raw, options.max_depth);

    if options.attach_sources {
        if let Some(archive) = archive.as_mut() {
            let sources = build_source_map(archive);
            attach_sources(&mut objects, &sources);
        }
    }
    if options.merge_extensions {
        let merged = merge_extensions(&mut objects);
        debug!("Merged {} table extension(s)", merged);
    }

    let info = AppInfo::from_manifest(&raw);
    Ok(ParsedPackage {
        raw,
        objects,
        info,
        archive,
    })
}

/// Read and parse a package file from disk.
pub fn read_package_file(path: impl AsRef<Path>) -> Result<ParsedPackage, PackageError> {
    let path = path.as_ref();
    debug!("Reading package file {}", path.display());
    let bytes = std::fs::read(path)?;
    parse_package(bytes)
}
