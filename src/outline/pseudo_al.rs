//! Structural pseudo-source listings for objects shipped without source.
//!
//! The output is a reading aid, not compilable code: a header line, then one
//! block per member collection the object kind supports.

use super::options::OutlineOptions;
use crate::core::text_utils::quote_identifier;
use crate::symbols::ObjectDescriptor;

const MISSING_SOURCE_NOTE: &str =
    "// Note: Full source requires ShowMyCode=true in the extension.";

/// Outline with default options.
pub fn generate_pseudo_al(object: &ObjectDescriptor) -> String {
    generate_pseudo_al_with(object, &OutlineOptions::default())
}

/// Outline `object`; empty when the object has no kind.
pub fn generate_pseudo_al_with(object: &ObjectDescriptor, options: &OutlineOptions) -> String {
    if object.kind.is_empty() {
        return String::new();
    }

    let mut out = Outline::new(options);
    match object.kind.as_str() {
        "Table" => {
            out.header("table", object);
            out.block("fields", object.fields.iter().map(|f| {
                format!(
                    "field({}; {}) {} {{}}",
                    id_text(f.id),
                    quote_identifier(&f.name),
                    f.field_type.as_deref().filter(|t| !t.is_empty()).unwrap_or("Any")
                )
            }));
            out.block("keys", object.keys.iter().map(|k| {
                let fields: Vec<String> =
                    k.fields.iter().map(String::as_str).map(quote_identifier).collect();
                format!("key({}; {}) {{}}", quote_identifier(&k.name), fields.join(", "))
            }));
        }
        "Page" => {
            out.header("page", object);
            out.block("layout", object.controls.iter().map(|c| {
                format!(
                    "{}({}; {}) {{}}",
                    control_keyword(c.subtype.as_deref()),
                    id_text(c.id),
                    quote_identifier(&c.name)
                )
            }));
            out.block("actions", object.actions.iter().map(|a| {
                format!("action({}; {}) {{}}", id_text(a.id), quote_identifier(&a.name))
            }));
        }
        "Codeunit" => {
            out.header("codeunit", object);
            out.line(1, "// Methods not available in symbols-only packages");
        }
        "Enum" | "EnumType" => {
            out.header("enum", object);
            for value in &object.values {
                out.line(
                    1,
                    &format!("value({}; {}) {{}}", id_text(value.id), quote_identifier(&value.name)),
                );
            }
        }
        other => {
            out.header(&other.to_lowercase(), object);
            out.line(1, "// Outline only");
        }
    }
    out.line(0, "}");

    if options.note_missing_source {
        out.lines.push(String::new());
        out.line(0, MISSING_SOURCE_NOTE);
    }
    out.lines.join("\n")
}

struct Outline<'a> {
    options: &'a OutlineOptions,
    lines: Vec<String>,
}

impl<'a> Outline<'a> {
    fn new(options: &'a OutlineOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, level: usize, text: &str) {
        self.lines.push(format!("{}{}", self.options.indent(level), text));
    }

    /// `kind id "name"` followed by the opening brace.
    fn header(&mut self, keyword: &str, object: &ObjectDescriptor) {
        self.line(
            0,
            &format!("{} {} \"{}\"", keyword, id_text(object.id), object.name),
        );
        self.line(0, "{");
    }

    /// A named section; omitted entirely when there are no entries.
    fn block(&mut self, title: &str, entries: impl Iterator<Item = String>) {
        let mut entries = entries.peekable();
        if entries.peek().is_none() {
            return;
        }
        self.line(1, title);
        self.line(1, "{");
        for entry in entries {
            self.line(2, &entry);
        }
        self.line(1, "}");
    }
}

fn id_text(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Outline keyword for a page control subtype.
fn control_keyword(subtype: Option<&str>) -> &'static str {
    let subtype = subtype.unwrap_or_default().to_lowercase();
    if ["group", "area", "repeater"].iter().any(|s| subtype.contains(s)) {
        "group"
    } else if subtype.contains("action") {
        "action"
    } else {
        "field"
    }
}
