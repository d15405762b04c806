//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration. The wrappers mirror the wire
//! shape of their counterparts but live in the inbound adapter layer where
//! framework concerns belong.

#![expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]

use utoipa::ToSchema;

use crate::inbound::http::auth::SessionStatus;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures list every violation under `details.violations`.
#[derive(ToSchema)]
#[schema(as = domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "request validation failed")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::validation::Violation`].
#[derive(ToSchema)]
#[schema(as = domain::Violation)]
pub struct ViolationSchema {
    /// Field that failed, or `$record` for whole-record problems.
    #[schema(example = "userId")]
    field: String,
    /// Message suitable for display next to the field.
    #[schema(example = "userId is required")]
    message: String,
    /// Stable rule code.
    #[schema(example = "missing_field")]
    code: String,
}

/// OpenAPI schema for [`crate::domain::validation::FieldRule`].
#[derive(ToSchema)]
#[schema(as = domain::FieldRule)]
pub struct FieldRuleSchema {
    /// Field the rule inspects.
    #[schema(example = "avatar")]
    field: String,
    /// Predicate name.
    #[schema(example = "url")]
    rule: String,
    /// Message reported on failure.
    #[schema(example = "avatar must be a valid URL")]
    message: String,
    /// Whether the field may be omitted.
    optional: bool,
}

/// OpenAPI schema for [`crate::domain::validation::Schema`].
#[derive(ToSchema)]
#[schema(as = domain::Schema)]
pub struct SchemaDescriptorSchema {
    /// Record kind.
    #[schema(example = "user-avatar")]
    name: String,
    /// Rules in evaluation order.
    rules: Vec<FieldRuleSchema>,
}

/// OpenAPI schema for [`envelope::Pagination`].
#[derive(ToSchema)]
#[schema(as = envelope::Pagination, rename_all = "camelCase")]
pub struct PaginationSchema {
    /// One-based page number.
    #[schema(example = 1)]
    page: u32,
    /// Items per page.
    #[schema(example = 20)]
    page_size: u32,
    /// Items across all pages.
    #[schema(example = 4)]
    total_items: u64,
    /// Number of pages.
    #[schema(example = 1)]
    total_pages: u64,
}

/// Envelope carrying the session state.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SessionStatusEnvelopeSchema {
    data: SessionStatus,
    #[schema(example = 200)]
    status: u16,
    #[schema(example = "OK")]
    status_text: String,
}

/// Envelope carrying one schema descriptor.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SchemaEnvelopeSchema {
    data: SchemaDescriptorSchema,
    #[schema(example = 200)]
    status: u16,
    #[schema(example = "OK")]
    status_text: String,
}

/// Envelope carrying one page of schema descriptors.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SchemaPageEnvelopeSchema {
    data: Vec<SchemaDescriptorSchema>,
    #[schema(example = 200)]
    status: u16,
    #[schema(example = "OK")]
    status_text: String,
    meta: PaginationSchema,
}

/// Envelope carrying an accepted record.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RecordEnvelopeSchema {
    data: serde_json::Value,
    #[schema(example = 200)]
    status: u16,
    #[schema(example = "OK")]
    status_text: String,
}
