//! Bookable service DTOs.
//!
//! Durations and prices are validated as non-negative numbers on both create
//! and update. They are kept as JSON numbers so accepted values echo back
//! exactly as supplied.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::validation::{Dto, FieldRule, RuleKind, Schema};

static SERVICE_CREATE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(
        "service-create",
        vec![
            FieldRule::new("name", RuleKind::Present, "name is required"),
            FieldRule::new("name", RuleKind::Text, "name must be a string"),
            FieldRule::new("durationMinutes", RuleKind::Present, "durationMinutes is required"),
            FieldRule::new("durationMinutes", RuleKind::Number, "durationMinutes must be a number"),
            FieldRule::new(
                "durationMinutes",
                RuleKind::NonNegative,
                "durationMinutes must not be negative",
            ),
            FieldRule::new("price", RuleKind::Present, "price is required"),
            FieldRule::new("price", RuleKind::Number, "price must be a number"),
            FieldRule::new("price", RuleKind::NonNegative, "price must not be negative"),
        ],
    )
});

static SERVICE_UPDATE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(
        "service-update",
        vec![
            FieldRule::new("id", RuleKind::Present, "id is required"),
            FieldRule::new("id", RuleKind::Text, "id must be a string"),
            FieldRule::new("name", RuleKind::Present, "name is required"),
            FieldRule::new("name", RuleKind::Text, "name must be a string"),
            FieldRule::new("durationMinutes", RuleKind::Present, "durationMinutes is required"),
            FieldRule::new("durationMinutes", RuleKind::Number, "durationMinutes must be a number"),
            FieldRule::new(
                "durationMinutes",
                RuleKind::NonNegative,
                "durationMinutes must not be negative",
            ),
            FieldRule::new("price", RuleKind::Present, "price is required"),
            FieldRule::new("price", RuleKind::Number, "price must be a number"),
            FieldRule::new("price", RuleKind::NonNegative, "price must not be negative"),
            FieldRule::new(
                "professionalsIds",
                RuleKind::TextList,
                "professionalsIds must be a list of strings",
            )
            .optional(),
        ],
    )
});

/// Request to create a bookable service.
///
/// Example JSON: `{"name":"Haircut","durationMinutes":30,"price":25}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreate {
    name: String,
    duration_minutes: Number,
    price: Number,
}

impl ServiceCreate {
    /// Display name of the service.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Length of one booking, in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> &Number {
        &self.duration_minutes
    }

    /// Price of one booking.
    #[must_use]
    pub const fn price(&self) -> &Number {
        &self.price
    }
}

impl Dto for ServiceCreate {
    fn schema() -> &'static Schema {
        &SERVICE_CREATE_SCHEMA
    }
}

/// Request to update an existing service and, optionally, who provides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdate {
    id: String,
    name: String,
    duration_minutes: Number,
    price: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    professionals_ids: Option<Vec<String>>,
}

impl ServiceUpdate {
    /// Identifier of the service being updated.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// New display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// New booking length, in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> &Number {
        &self.duration_minutes
    }

    /// New price.
    #[must_use]
    pub const fn price(&self) -> &Number {
        &self.price
    }

    /// Professionals offering the service, when the update changes them.
    #[must_use]
    pub fn professionals_ids(&self) -> Option<&[String]> {
        self.professionals_ids.as_deref()
    }
}

impl Dto for ServiceUpdate {
    fn schema() -> &'static Schema {
        &SERVICE_UPDATE_SCHEMA
    }
}
