//! Request contract core: declarative record validation, response envelopes,
//! and session invalidation behind an Actix HTTP adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
