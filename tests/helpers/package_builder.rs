//! In-memory `.app` archives for package tests.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds a ZIP archive entry by entry.
#[derive(Default)]
pub struct PackageBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in self.entries {
            writer
                .start_file(name, SimpleFileOptions::default())
                .expect("start zip entry");
            writer.write_all(&content).expect("write zip entry");
        }
        writer.finish().expect("finish zip").into_inner()
    }
}
