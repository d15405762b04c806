//! Record schema endpoints.
//!
//! ```text
//! GET  /api/v1/schemas                  List registered schemas (paginated)
//! GET  /api/v1/schemas/{kind}           Describe one schema
//! POST /api/v1/schemas/{kind}/validate  Validate a record against its schema
//! ```

use actix_web::{get, post, web};
use envelope::{PageRequest, PaginationError};
use serde_json::{Value, json};

use crate::domain::Error;
use crate::domain::dto::{
    DtoKind, PaymentRecord, ServiceCreate, ServiceUpdate, UserAvatarUpdate,
};
use crate::domain::validation::{Dto, Schema, validate_record};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Enveloped;
use crate::inbound::http::schemas::{
    ErrorSchema, RecordEnvelopeSchema, SchemaEnvelopeSchema, SchemaPageEnvelopeSchema,
};

fn parse_kind(raw: &str) -> Result<DtoKind, Error> {
    raw.parse::<DtoKind>().map_err(|err| {
        Error::not_found(err.to_string()).with_details(json!({ "kind": err.name() }))
    })
}

fn map_pagination_error(err: PaginationError) -> Error {
    let field = match err {
        PaginationError::ZeroPage => "page",
        PaginationError::ZeroPageSize => "pageSize",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": "invalid_pagination",
    }))
}

/// Validate `payload` as a `T` and echo the accepted record.
fn accept<T: Dto>(payload: &Value) -> Result<Value, Error> {
    let record = validate_record::<T>(payload).into_result()?;
    serde_json::to_value(record)
        .map_err(|err| Error::internal(format!("failed to encode accepted record: {err}")))
}

/// List registered record schemas.
#[utoipa::path(
    get,
    path = "/api/v1/schemas",
    params(
        ("page" = Option<u32>, Query, description = "One-based page number, default 1"),
        ("pageSize" = Option<u32>, Query, description = "Items per page, default 20, max 100")
    ),
    responses(
        (status = 200, description = "One page of schemas", body = SchemaPageEnvelopeSchema),
        (status = 400, description = "Invalid pagination", body = ErrorSchema)
    ),
    tags = ["schemas"],
    operation_id = "listSchemas"
)]
#[get("/schemas")]
pub async fn list_schemas(
    query: web::Query<PageRequest>,
) -> ApiResult<Enveloped<Vec<&'static Schema>>> {
    let schemas: Vec<&'static Schema> = DtoKind::ALL.iter().map(|kind| kind.schema()).collect();
    let (page, meta) = query
        .into_inner()
        .slice(&schemas)
        .map_err(map_pagination_error)?;
    Ok(Enveloped::page(page, meta))
}

/// Describe the rules of one record kind.
#[utoipa::path(
    get,
    path = "/api/v1/schemas/{kind}",
    params(("kind" = String, Path, description = "Record kind, e.g. user-avatar")),
    responses(
        (status = 200, description = "Schema descriptor", body = SchemaEnvelopeSchema),
        (status = 404, description = "Unknown record kind", body = ErrorSchema)
    ),
    tags = ["schemas"],
    operation_id = "getSchema"
)]
#[get("/schemas/{kind}")]
pub async fn get_schema(path: web::Path<String>) -> ApiResult<Enveloped<&'static Schema>> {
    let kind = parse_kind(&path)?;
    Ok(Enveloped::ok(kind.schema()))
}

/// Validate a record against its schema.
///
/// Accepted records are echoed back in their typed form. Rejected records
/// produce `400 invalid_request` listing every violation.
#[utoipa::path(
    post,
    path = "/api/v1/schemas/{kind}/validate",
    params(("kind" = String, Path, description = "Record kind, e.g. service-create")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Record accepted", body = RecordEnvelopeSchema),
        (status = 400, description = "Record rejected or body malformed", body = ErrorSchema),
        (status = 404, description = "Unknown record kind", body = ErrorSchema)
    ),
    tags = ["schemas"],
    operation_id = "validateRecord"
)]
#[post("/schemas/{kind}/validate")]
pub async fn validate_payload(
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<Enveloped<Value>> {
    let payload = payload.into_inner();
    let record = match parse_kind(&path)? {
        DtoKind::UserAvatar => accept::<UserAvatarUpdate>(&payload),
        DtoKind::ServiceCreate => accept::<ServiceCreate>(&payload),
        DtoKind::ServiceUpdate => accept::<ServiceUpdate>(&payload),
        DtoKind::Payment => accept::<PaymentRecord>(&payload),
    }?;
    Ok(Enveloped::ok(record))
}
