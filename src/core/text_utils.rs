//! Text manipulation utilities for manifest values and AL identifiers.

/// The byte-order mark some packagers prepend to JSON and `.al` entries.
const BOM: char = '\u{FEFF}';

/// Check if a character is an AL "word" character.
///
/// Matches the ASCII word class (`[A-Za-z0-9_]`); anything else forces an
/// identifier to be quoted.
#[inline]
pub fn is_word_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Remove a single leading byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Strip the BOM and surrounding whitespace before handing text to a parser.
pub fn clean_text(text: &str) -> &str {
    strip_bom(text).trim()
}

/// Remove every double quote from a name (`"Sales Header"` → `Sales Header`).
pub fn strip_double_quotes(name: &str) -> String {
    name.replace('"', "")
}

/// Case-insensitive lookup key for object names: quotes removed, lowercased.
///
/// # Example
/// ```
/// use al_explorer::core::text_utils::name_key;
///
/// assert_eq!(name_key("\"Sales Header\""), "sales header");
/// assert_eq!(name_key("Customer"), "customer");
/// ```
pub fn name_key(name: &str) -> String {
    strip_double_quotes(name).to_lowercase()
}

/// Trim a layout path as it appears in report properties.
///
/// Removes surrounding whitespace, one leading quote and one trailing quote
/// (optionally followed by `;`).
///
/// # Example
/// ```
/// use al_explorer::core::text_utils::trim_layout_quotes;
///
/// assert_eq!(trim_layout_quotes(" './Layouts/Sales.rdlc'; "), "./Layouts/Sales.rdlc");
/// assert_eq!(trim_layout_quotes("\"Word.docx\""), "Word.docx");
/// ```
pub fn trim_layout_quotes(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed
        .strip_prefix(['"', '\''])
        .unwrap_or(trimmed);
    let without_semi = trimmed.strip_suffix(';').unwrap_or(trimmed);
    match without_semi.strip_suffix(['"', '\'']) {
        Some(rest) => rest.to_string(),
        None => trimmed.to_string(),
    }
}

/// Last path segment, splitting on both `/` and `\`.
pub fn basename(path: &str) -> &str {
    match path.rsplit(['/', '\\']).next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}

/// Quote an identifier when it contains a non-word character.
///
/// # Example
/// ```
/// use al_explorer::core::text_utils::quote_identifier;
///
/// assert_eq!(quote_identifier("No."), "\"No.\"");
/// assert_eq!(quote_identifier("Name"), "Name");
/// ```
pub fn quote_identifier(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.chars().all(is_word_character) {
        trimmed.to_string()
    } else {
        format!("\"{trimmed}\"")
    }
}
