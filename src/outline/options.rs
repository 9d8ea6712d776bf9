//! Outline options

/// Options for pseudo-source outlines
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Number of spaces per indentation level
    pub indent: usize,
    /// Append a note that full source needs the package to ship it
    pub note_missing_source: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            note_missing_source: false,
        }
    }
}

impl OutlineOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_missing_source_note(mut self, note: bool) -> Self {
        self.note_missing_source = note;
        self
    }

    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}
