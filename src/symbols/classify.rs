//! Member classification by free-text kind name.
//!
//! Manifests name member kinds inconsistently (`Field`, `PageField`,
//! `TableField`, `Column`, `ActionArea`, `EnumValue`, ...). Classification is
//! a prioritized rule table evaluated top to bottom; the first matching
//! pattern wins. `field` is checked before the control patterns, so a kind
//! such as `PageField` is a field even though `/field/` also appears in the
//! control rule.

use std::sync::LazyLock;

use regex::Regex;

/// Which descriptor collection a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberCategory {
    Field,
    Action,
    Key,
    Control,
    EnumValue,
}

/// Ordered `(pattern, category)` rules.
static MEMBER_RULES: LazyLock<Vec<(Regex, MemberCategory)>> = LazyLock::new(|| {
    [
        (r"(?i)field|column", MemberCategory::Field),
        (r"(?i)action", MemberCategory::Action),
        (r"(?i)key", MemberCategory::Key),
        (
            r"(?i)group|area|part|label|control|field|repeater",
            MemberCategory::Control,
        ),
        (r"(?i)enumvalue|value", MemberCategory::EnumValue),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).expect("valid member rule"), category))
    .collect()
});

static FIELD_KIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)field|column").expect("valid"));

static FLOWFIELD_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)flowfield").expect("valid"));

/// Classify a member by its kind name; `None` if no rule matches.
pub fn classify_member(kind: &str) -> Option<MemberCategory> {
    MEMBER_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(kind))
        .map(|(_, category)| *category)
}

/// True if a table member's kind names a field or column.
pub fn is_field_kind(kind: &str) -> bool {
    FIELD_KIND.is_match(kind)
}

/// True if a field-class value marks a FlowField.
pub fn is_flowfield_class(class: &str) -> bool {
    FLOWFIELD_CLASS.is_match(class)
}
