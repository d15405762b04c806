//! Field-level rules that make up a DTO schema.

use serde::Serialize;

/// Predicate applied to a single field of an inbound record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// The field must be present and not an empty string.
    Present,
    /// The value must be a string.
    Text,
    /// The value must be a hyphenated version-4 UUID with the RFC 4122
    /// variant.
    UuidV4,
    /// The value must be an absolute `http`, `https`, or `ftp` URL with a host.
    Url,
    /// The value must be a finite number.
    Number,
    /// A numeric value must not be below zero.
    NonNegative,
    /// The value must be an array of strings.
    TextList,
}

impl RuleKind {
    /// Stable violation code reported when this rule fails.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Present => "missing_field",
            Self::Text => "not_text",
            Self::UuidV4 => "invalid_uuid",
            Self::Url => "invalid_url",
            Self::Number => "not_a_number",
            Self::NonNegative => "negative_number",
            Self::TextList => "not_text_list",
        }
    }
}

/// One named constraint on one field.
///
/// Rules are immutable once built. `optional` marks a field whose absence is
/// acceptable; the rule then only inspects values that are actually supplied.
///
/// # Examples
/// ```
/// use agenda::domain::validation::{FieldRule, RuleKind};
///
/// let rule = FieldRule::new("professionalsIds", RuleKind::TextList, "must be a list")
///     .optional();
/// assert!(rule.is_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    field: &'static str,
    #[serde(rename = "rule")]
    kind: RuleKind,
    message: &'static str,
    optional: bool,
}

impl FieldRule {
    /// Rule for a required field.
    #[must_use]
    pub const fn new(field: &'static str, kind: RuleKind, message: &'static str) -> Self {
        Self {
            field,
            kind,
            message,
            optional: false,
        }
    }

    /// Mark the field as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Name of the field the rule inspects.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Predicate applied to the field.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Human-readable message reported on failure.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Whether the field may be omitted.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}
