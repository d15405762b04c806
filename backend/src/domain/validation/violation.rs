//! Per-field validation violations and their aggregate failure.

use serde::Serialize;
use serde_json::json;

use super::rule::FieldRule;
use crate::domain::Error;

/// Code reported when an accepted record cannot be narrowed into its DTO.
pub const SHAPE_VIOLATION_CODE: &str = "invalid_shape";

/// Field reported for violations that concern the whole record.
pub const RECORD_FIELD: &str = "$record";

/// One failed rule: the field, a message callers can render next to it, and
/// a stable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    field: String,
    message: String,
    code: &'static str,
}

impl Violation {
    pub(super) fn from_rule(rule: &FieldRule) -> Self {
        Self {
            field: rule.field().to_owned(),
            message: rule.message().to_owned(),
            code: rule.kind().code(),
        }
    }

    pub(super) fn shape(message: impl Into<String>) -> Self {
        Self {
            field: RECORD_FIELD.to_owned(),
            message: message.into(),
            code: SHAPE_VIOLATION_CODE,
        }
    }

    /// Field that failed.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

/// Every violation found for one record, returned to callers as data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request validation failed with {} violation(s)", .violations.len())]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub(super) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Violations in schema declaration order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl From<ValidationFailure> for Error {
    fn from(failure: ValidationFailure) -> Self {
        Self::invalid_request("request validation failed")
            .with_details(json!({ "violations": failure.violations }))
    }
}
