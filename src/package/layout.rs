//! Report layout resolution and preview.
//!
//! Layout paths in report properties are relative to the report's source
//! file and frequently disagree with the archive in case or prefix, so
//! resolution tries progressively looser matches:
//!
//! 1. for each candidate path (joined to the source directory, then as
//!    written): exact entry name, case-insensitive name, case-insensitive
//!    suffix
//! 2. any `.rdl`/`.rdlc`/`.docx` entry under a `layouts/` folder
//! 3. an entry with the requested file name anywhere in the archive

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::archive::PackageArchive;
use super::error::PackageError;
use crate::core::text_utils::{basename, trim_layout_quotes};

static LAYOUT_FOLDER_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)layouts/.+\.(rdl|rdlc|docx)$").expect("valid"));

/// Layout format, from the entry's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Rdlc,
    Word,
    Xml,
}

impl LayoutKind {
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.ends_with(".docx") {
            Self::Word
        } else if lower.ends_with(".rdl") || lower.ends_with(".rdlc") {
            Self::Rdlc
        } else {
            Self::Xml
        }
    }
}

/// A layout entry read from a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLayout {
    pub entry_path: String,
    pub kind: LayoutKind,
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl ReportLayout {
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Indented XML for RDLC/XML layouts; a placeholder for Word documents.
    pub fn preview(&self) -> String {
        match self.kind {
            LayoutKind::Word => format!("(Binary layout: {})", self.entry_path),
            LayoutKind::Rdlc | LayoutKind::Xml => pretty_xml(&self.text()),
        }
    }
}

impl PackageArchive {
    /// Locate and read a report layout.
    ///
    /// `rdlc` and `word` are the layout paths as declared on the report,
    /// `reference_source` the report's source file path.
    pub fn load_report_layout(
        &mut self,
        reference_source: Option<&str>,
        rdlc: Option<&str>,
        word: Option<&str>,
    ) -> Result<ReportLayout, PackageError> {
        let requested: Vec<String> = [rdlc, word]
            .into_iter()
            .flatten()
            .map(trim_layout_quotes)
            .filter(|p| !p.is_empty())
            .collect();

        let entry = resolve_layout_entry(
            self.entry_names(),
            reference_source.unwrap_or_default(),
            &requested,
        )
        .map(str::to_string)
        .ok_or_else(|| PackageError::LayoutNotFound(requested.join(", ")))?;
        debug!("Resolved report layout to archive entry '{}'", entry);

        let content = self.read_bytes(&entry)?;
        Ok(ReportLayout {
            kind: LayoutKind::from_path(&entry),
            entry_path: entry,
            content,
        })
    }
}

/// Choose the archive entry for the requested layout paths.
pub fn resolve_layout_entry<'a>(
    entries: &'a [String],
    reference_source: &str,
    requested: &[String],
) -> Option<&'a str> {
    let normalized: Vec<(String, String)> = entries
        .iter()
        .map(|e| {
            let path = normalize_path(e);
            let lower = path.to_lowercase();
            (path, lower)
        })
        .collect();
    let pick = |pos: Option<usize>| pos.map(|i| entries[i].as_str());

    let base = normalize_path(reference_source);
    let candidates = requested.iter().flat_map(|path| {
        [
            join_path(&base, path),
            strip_dot_slash(&normalize_path(path)).to_string(),
        ]
    });
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        let found = normalized
            .iter()
            .position(|(path, _)| *path == candidate)
            .or_else(|| normalized.iter().position(|(_, lower)| *lower == wanted))
            .or_else(|| {
                normalized
                    .iter()
                    .position(|(_, lower)| !wanted.is_empty() && lower.ends_with(&wanted))
            });
        if found.is_some() {
            return pick(found);
        }
    }

    if let Some(found) = pick(
        normalized
            .iter()
            .position(|(path, _)| LAYOUT_FOLDER_ENTRY.is_match(path)),
    ) {
        return Some(found);
    }

    let file_name = requested
        .first()
        .map(|p| basename(p).to_lowercase())
        .filter(|n| !n.is_empty())?;
    pick(
        normalized
            .iter()
            .position(|(_, lower)| basename(lower) == file_name),
    )
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

fn strip_dot_slash(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Resolve `relative` against the directory of `base`, folding `.` and `..`.
pub fn join_path(base: &str, relative: &str) -> String {
    let base = normalize_path(base);
    let relative = normalize_path(relative);
    let dir = match base.rfind('/') {
        Some(pos) => &base[..=pos],
        None => "",
    };
    let relative = relative.strip_prefix('/').unwrap_or(&relative);
    let relative = strip_dot_slash(relative);

    let mut parts: Vec<&str> = Vec::new();
    for part in dir.split('/').chain(relative.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}

/// Re-indent XML two spaces per level; malformed input is returned as is.
pub fn pretty_xml(xml: &str) -> String {
    reindent(xml).unwrap_or_else(|| xml.trim().to_string())
}

fn reindent(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event).ok()?,
            Err(_) => return None,
        }
    }
    String::from_utf8(writer.into_inner()).ok()
}
