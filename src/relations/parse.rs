//! Table relation expression parsing.
//!
//! Grammar (keywords case-insensitive, whitespace optional):
//!
//! ```text
//! [RECORD] (<quoted> | <ident>) [WHERE( <target> = FIELD(<source>) [, ...] )]
//! ```
//!
//! Parsing never fails. Unrecognized input yields an empty target name and
//! no mappings; a recognizable prefix yields a partial result.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static TARGET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^(?:record\s+)?(?:"([^"]+)"|([A-Za-z0-9_]+))"#).expect("valid")
});

static WHERE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)where\s*\((.*)\)").expect("valid"));

static FIELD_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:"([^"]+)"|([A-Za-z0-9_.]+))\s*=\s*field\s*\((?:"([^"]+)"|([A-Za-z0-9_.]+))\)"#,
    )
    .expect("valid")
});

/// One `target = FIELD(source)` pair from a `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    /// Column on the referenced table.
    pub target: String,
    /// Column on the referencing table.
    pub source: String,
}

impl FieldMapping {
    pub fn new(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
        }
    }
}

/// A parsed relation expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRelation {
    /// Referenced table, unquoted; empty when unrecognized.
    pub target_name: String,
    pub mappings: Vec<FieldMapping>,
}

impl TableRelation {
    pub fn is_empty(&self) -> bool {
        self.target_name.is_empty() && self.mappings.is_empty()
    }
}

/// Parse a relation expression such as
/// `Customer WHERE("No."=FIELD("Sell-to Customer No."))`.
pub fn parse_table_relation(expr: &str) -> TableRelation {
    let expr = expr.trim();
    if expr.is_empty() {
        return TableRelation::default();
    }

    let target_name = TARGET_NAME
        .captures(expr)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mappings = match WHERE_CLAUSE.captures(expr).and_then(|caps| caps.get(1)) {
        Some(inner) => parse_mappings(inner.as_str()),
        None => Vec::new(),
    };

    TableRelation {
        target_name,
        mappings,
    }
}

fn parse_mappings(clause: &str) -> Vec<FieldMapping> {
    FIELD_PAIR
        .captures_iter(clause)
        .filter_map(|caps| {
            let side = |quoted: usize, bare: usize| {
                caps.get(quoted)
                    .or_else(|| caps.get(bare))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default()
            };
            let mapping = FieldMapping::new(side(1, 2), side(3, 4));
            (!mapping.target.is_empty() || !mapping.source.is_empty()).then_some(mapping)
        })
        .collect()
}
