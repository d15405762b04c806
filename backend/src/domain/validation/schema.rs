//! Ordered, inspectable rule sets describing one DTO kind.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use super::predicates;
use super::rule::{FieldRule, RuleKind};
use super::violation::Violation;

/// Defects in a schema definition.
///
/// These are configuration errors: they surface when schemas are built at
/// startup and never reach request handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The schema has no name.
    #[error("schema name must not be empty")]
    EmptyName,
    /// A rule names no field.
    #[error("schema {schema} has a rule with an empty field name")]
    EmptyField {
        /// Schema containing the rule.
        schema: &'static str,
    },
    /// A rule carries no failure message.
    #[error("schema {schema} has a rule for {field} with an empty message")]
    EmptyMessage {
        /// Schema containing the rule.
        schema: &'static str,
        /// Field the rule inspects.
        field: &'static str,
    },
    /// The same predicate is declared twice for one field.
    #[error("schema {schema} declares {} twice for field {field}", .kind.code())]
    DuplicateRule {
        /// Schema containing the rules.
        schema: &'static str,
        /// Field declared twice.
        field: &'static str,
        /// Predicate declared twice.
        kind: RuleKind,
    },
    /// A presence rule contradicts the optional flag.
    #[error("schema {schema} marks {field} optional but also requires its presence")]
    OptionalPresence {
        /// Schema containing the rule.
        schema: &'static str,
        /// Field marked optional.
        field: &'static str,
    },
}

/// A named, ordered collection of [`FieldRule`]s.
///
/// Rule order does not affect the verdict, only the order in which violations
/// are reported.
///
/// # Examples
/// ```
/// use agenda::domain::validation::{FieldRule, RuleKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new(
///     "greeting",
///     vec![FieldRule::new("name", RuleKind::Present, "name is required")],
/// );
/// let record = json!({ "name": "" });
/// let violations = schema.check(record.as_object().expect("object"));
/// assert_eq!(violations.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    name: &'static str,
    rules: Vec<FieldRule>,
    #[serde(skip)]
    presence_covered: HashSet<&'static str>,
}

impl Schema {
    /// Build a schema, panicking on a malformed definition.
    ///
    /// # Panics
    /// Panics with the [`SchemaError`] description when the definition is
    /// malformed. Schemas are built once at startup, so this fails fast before
    /// any request is served.
    #[must_use]
    pub fn new(name: &'static str, rules: Vec<FieldRule>) -> Self {
        match Self::try_new(name, rules) {
            Ok(schema) => schema,
            Err(err) => panic!("invalid DTO schema: {err}"),
        }
    }

    /// Fallible constructor rejecting duplicate `(field, kind)` pairs, blank
    /// names or messages, and optional fields with presence rules.
    pub fn try_new(name: &'static str, rules: Vec<FieldRule>) -> Result<Self, SchemaError> {
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyName);
        }

        let mut seen = HashSet::new();
        let mut presence_covered = HashSet::new();
        for rule in &rules {
            let field = rule.field();
            if field.trim().is_empty() {
                return Err(SchemaError::EmptyField { schema: name });
            }
            if rule.message().trim().is_empty() {
                return Err(SchemaError::EmptyMessage {
                    schema: name,
                    field,
                });
            }
            if !seen.insert((field, rule.kind())) {
                return Err(SchemaError::DuplicateRule {
                    schema: name,
                    field,
                    kind: rule.kind(),
                });
            }
            if rule.kind() == RuleKind::Present {
                presence_covered.insert(field);
            }
        }

        if let Some(rule) = rules
            .iter()
            .find(|rule| rule.is_optional() && presence_covered.contains(rule.field()))
        {
            return Err(SchemaError::OptionalPresence {
                schema: name,
                field: rule.field(),
            });
        }

        Ok(Self {
            name,
            rules,
            presence_covered,
        })
    }

    /// Schema identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Evaluate every rule against `record` and collect all violations in
    /// declaration order.
    ///
    /// Absent values are reported by presence rules. Type and format rules
    /// only report absence for fields that are neither optional nor covered
    /// by a presence rule, so one missing field yields one violation.
    #[must_use]
    pub fn check(&self, record: &Map<String, Value>) -> Vec<Violation> {
        self.rules
            .iter()
            .filter(|rule| !self.passes(rule, record.get(rule.field())))
            .map(Violation::from_rule)
            .collect()
    }

    fn passes(&self, rule: &FieldRule, value: Option<&Value>) -> bool {
        match (rule.kind(), value) {
            (RuleKind::Present, value) => predicates::is_present(value),
            (_, None | Some(Value::Null)) => {
                rule.is_optional() || self.presence_covered.contains(rule.field())
            }
            (RuleKind::Text, Some(value)) => predicates::is_text(value),
            (RuleKind::UuidV4, Some(value)) => predicates::is_uuid_v4(value),
            (RuleKind::Url, Some(value)) => predicates::is_absolute_url(value),
            (RuleKind::Number, Some(value)) => predicates::is_finite_number(value),
            (RuleKind::NonNegative, Some(value)) => predicates::is_non_negative(value),
            (RuleKind::TextList, Some(value)) => predicates::is_text_list(value),
        }
    }
}
