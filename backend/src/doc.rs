//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer and the
//! schema wrappers that describe domain and envelope types without coupling
//! them to utoipa. The document backs Swagger UI in debug builds and is
//! exported by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FieldRuleSchema, PaginationSchema, SchemaDescriptorSchema,
    ViolationSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie carrying the credential token.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Agenda API",
        description = "Record validation, response envelopes, and session invalidation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::validation::list_schemas,
        crate::inbound::http::validation::get_schema,
        crate::inbound::http::validation::validate_payload,
        crate::inbound::http::auth::session_status,
        crate::inbound::http::auth::logout_action,
        crate::inbound::http::auth::logout_transport,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ViolationSchema,
        FieldRuleSchema,
        SchemaDescriptorSchema,
        PaginationSchema,
    )),
    tags(
        (name = "schemas", description = "Record schemas and validation"),
        (name = "session", description = "Session state and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
