//! Object list filters: name wildcards and id ranges.
//!
//! Filter expressions follow the object-list conventions users know from the
//! client: `Cust*`, `@*ledger*`, `50000..50099`, `>=18`. An empty or
//! unrecognized id expression filters nothing out.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::symbols::ObjectDescriptor;

static COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(>=|<=|>|<)\s*(\d+)\s*$").expect("valid"));

static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)?\s*\.\.\s*(\d+)?\s*$").expect("valid"));

static EXACT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("valid"));

// ============================================================================
// TEXT
// ============================================================================

/// Case-insensitive, fully anchored wildcard match on names.
#[derive(Debug, Clone)]
pub struct TextFilter {
    pattern: Option<Regex>,
}

impl TextFilter {
    /// Compile `expression`; `*` matches any run of characters and a leading
    /// `@` is ignored.
    pub fn new(expression: &str) -> Self {
        if expression.is_empty() {
            return Self { pattern: None };
        }
        let expression = expression.strip_prefix('@').unwrap_or(expression).trim();
        let body = expression
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let pattern = RegexBuilder::new(&format!("^{body}$"))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.as_ref().is_none_or(|re| re.is_match(text))
    }
}

// ============================================================================
// ID
// ============================================================================

/// Numeric id filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFilter {
    /// Empty or unrecognized expression.
    Any,
    Exact(i64),
    /// Inclusive bounds; a missing side is open.
    Range { min: Option<i64>, max: Option<i64> },
    Greater(i64),
    GreaterOrEqual(i64),
    Less(i64),
    LessOrEqual(i64),
}

impl IdFilter {
    pub fn parse(expression: &str) -> Self {
        let expression = expression.trim();
        if expression.is_empty() {
            return Self::Any;
        }
        if let Some(caps) = COMPARISON.captures(expression) {
            if let Ok(value) = caps[2].parse::<i64>() {
                return match &caps[1] {
                    ">" => Self::Greater(value),
                    ">=" => Self::GreaterOrEqual(value),
                    "<" => Self::Less(value),
                    _ => Self::LessOrEqual(value),
                };
            }
        }
        if let Some(caps) = RANGE.captures(expression) {
            let bound = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<i64>().ok());
            return Self::Range {
                min: bound(1),
                max: bound(2),
            };
        }
        if let Some(value) = EXACT
            .captures(expression)
            .and_then(|caps| caps[1].parse::<i64>().ok())
        {
            return Self::Exact(value);
        }
        Self::Any
    }

    /// Objects without an id only pass [`IdFilter::Any`].
    pub fn matches(&self, id: Option<i64>) -> bool {
        let Some(n) = id else {
            return matches!(self, Self::Any);
        };
        match *self {
            Self::Any => true,
            Self::Exact(v) => n == v,
            Self::Range { min, max } => {
                min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
            }
            Self::Greater(v) => n > v,
            Self::GreaterOrEqual(v) => n >= v,
            Self::Less(v) => n < v,
            Self::LessOrEqual(v) => n <= v,
        }
    }
}

// ============================================================================
// OBJECTS
// ============================================================================

/// Name and id filters combined; an absent filter accepts everything.
#[derive(Debug, Clone, Default)]
pub struct ObjectFilter {
    pub name: Option<TextFilter>,
    pub id: Option<IdFilter>,
}

impl ObjectFilter {
    pub fn with_name(mut self, expression: &str) -> Self {
        self.name = Some(TextFilter::new(expression));
        self
    }

    pub fn with_id(mut self, expression: &str) -> Self {
        self.id = Some(IdFilter::parse(expression));
        self
    }

    pub fn matches(&self, object: &ObjectDescriptor) -> bool {
        self.name.as_ref().is_none_or(|f| f.matches(&object.name))
            && self.id.is_none_or(|f| f.matches(object.id))
    }

    /// Matching objects, in input order.
    pub fn apply<'a>(&self, objects: &'a [ObjectDescriptor]) -> Vec<&'a ObjectDescriptor> {
        objects.iter().filter(|o| self.matches(o)).collect()
    }
}
