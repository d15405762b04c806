//! Actix responder for [`ResponseEnvelope`].
//!
//! The envelope's `status` doubles as the HTTP status so the two never
//! disagree.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use envelope::{Pagination, ResponseEnvelope};
use serde::Serialize;
use tracing::error;

use crate::domain::Error;

/// Successful handler output wrapped in a [`ResponseEnvelope`].
#[derive(Debug, Clone)]
pub struct Enveloped<T>(pub ResponseEnvelope<T>);

impl<T> Enveloped<T> {
    /// `200 OK` envelope around a single resource.
    pub fn ok(data: T) -> Self {
        Self(ResponseEnvelope::ok(data))
    }

    /// Single-resource envelope with an explicit status.
    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self(ResponseEnvelope::single(
            data,
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ))
    }

    /// Borrow the wrapped envelope.
    pub const fn envelope(&self) -> &ResponseEnvelope<T> {
        &self.0
    }
}

impl<T> Enveloped<Vec<T>> {
    /// `200 OK` envelope around one page of a list.
    pub fn page(items: Vec<T>, meta: Pagination) -> Self {
        Self(ResponseEnvelope::page(items, 200, "OK", meta))
    }
}

impl<T: Serialize> Responder for Enveloped<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match StatusCode::from_u16(self.0.status()) {
            Ok(status) => HttpResponse::build(status).json(self.0),
            Err(err) => {
                error!(status = self.0.status(), error = %err, "envelope carries an invalid status");
                Error::internal("Internal server error").error_response()
            }
        }
    }
}
