//! Declarative validation of inbound records.
//!
//! A [`Schema`] is data: an ordered list of [`FieldRule`]s built once at
//! configuration time. [`validate`] evaluates every rule against one
//! snapshot of the input and either accepts the record or rejects it with
//! every [`Violation`] found. Validation never short-circuits and never has
//! side effects.

mod predicates;
mod rule;
mod schema;
mod violation;

pub use rule::{FieldRule, RuleKind};
pub use schema::{Schema, SchemaError};
pub use violation::{RECORD_FIELD, SHAPE_VIOLATION_CODE, ValidationFailure, Violation};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Outcome of validating one record: all-or-nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    /// Every rule passed.
    Accepted(T),
    /// At least one rule failed; every failure is listed.
    Rejected(Vec<Violation>),
}

impl<T> ValidationResult<T> {
    /// Whether the record was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Violations of a rejected record; empty when accepted.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(violations) => violations,
        }
    }

    /// Convert into a `Result` so callers can propagate rejection with `?`.
    pub fn into_result(self) -> Result<T, ValidationFailure> {
        match self {
            Self::Accepted(value) => Ok(value),
            Self::Rejected(violations) => Err(ValidationFailure::new(violations)),
        }
    }
}

/// A typed record with a registered schema.
pub trait Dto: DeserializeOwned + Serialize {
    /// Schema applied before the record is narrowed into `Self`.
    fn schema() -> &'static Schema;
}

/// Validate `input` against `schema`.
///
/// Non-object inputs are treated as an empty record, so every required field
/// is reported missing.
///
/// # Examples
/// ```
/// use agenda::domain::validation::{validate, FieldRule, RuleKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new(
///     "duration",
///     vec![
///         FieldRule::new("minutes", RuleKind::Number, "minutes must be a number"),
///         FieldRule::new("minutes", RuleKind::NonNegative, "minutes must not be negative"),
///     ],
/// );
/// assert!(validate(&schema, &json!({ "minutes": 30 })).is_accepted());
/// assert_eq!(validate(&schema, &json!({ "minutes": -5 })).violations().len(), 1);
/// ```
#[must_use]
pub fn validate(schema: &Schema, input: &Value) -> ValidationResult<Map<String, Value>> {
    let record = match input {
        Value::Object(record) => record.clone(),
        _ => Map::new(),
    };
    let violations = schema.check(&record);
    if violations.is_empty() {
        ValidationResult::Accepted(record)
    } else {
        ValidationResult::Rejected(violations)
    }
}

/// Validate `input` against `T`'s schema and narrow it into `T`.
///
/// Narrowing only changes representation (strings to UUIDs, numbers to
/// floats); values are never coerced. A record that passes its rules but
/// still cannot be decoded is rejected with a single record-level violation.
#[must_use]
pub fn validate_record<T: Dto>(input: &Value) -> ValidationResult<T> {
    let schema = T::schema();
    match validate(schema, input) {
        ValidationResult::Accepted(record) => {
            match serde_json::from_value::<T>(Value::Object(record)) {
                Ok(value) => ValidationResult::Accepted(value),
                Err(error) => {
                    warn!(schema = schema.name(), %error, "accepted record failed to decode");
                    ValidationResult::Rejected(vec![Violation::shape(format!(
                        "record does not match the {} shape: {error}",
                        schema.name()
                    ))])
                }
            }
        }
        ValidationResult::Rejected(violations) => ValidationResult::Rejected(violations),
    }
}
