//! Success-response envelope shared by the agenda HTTP endpoints.
//!
//! Every successful payload leaves the service wrapped in a
//! [`ResponseEnvelope`]: the data itself, the status mirrored from the
//! transport layer, and [`Pagination`] metadata when (and only when) the data
//! is a list.
//!
//! ```
//! use envelope::{Pagination, ResponseEnvelope};
//!
//! let single = ResponseEnvelope::single("ok", 200, "OK");
//! assert!(single.meta().is_none());
//!
//! let meta = Pagination::try_new(1, 10, 1).expect("valid pagination");
//! let list = ResponseEnvelope::page(vec!["ok"], 200, "OK", meta);
//! assert_eq!(list.meta().map(Pagination::total_pages), Some(1));
//! ```

mod pagination;

pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, Pagination, PaginationError};

use serde::{Deserialize, Serialize};

/// Generic success payload.
///
/// ## Serialisation
/// `{ "data": .., "status": 200, "statusText": "OK", "meta": {..} }`. The
/// `meta` key is omitted entirely for singular resources; it is never emitted
/// as `null`, so consumers can rely on its absence meaning "not a list".
///
/// Construction performs no validation. `status` is expected to mirror the
/// status code the transport adapter sends with the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    data: T,
    status: u16,
    status_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<Pagination>,
}

/// Wrap `data` with status metadata and optional pagination.
///
/// Prefer [`ResponseEnvelope::single`] or [`ResponseEnvelope::page`], which
/// tie the presence of `meta` to the shape of the data.
#[must_use]
pub fn wrap<T>(
    data: T,
    status: u16,
    status_text: impl Into<String>,
    meta: Option<Pagination>,
) -> ResponseEnvelope<T> {
    ResponseEnvelope {
        data,
        status,
        status_text: status_text.into(),
        meta,
    }
}

impl<T> ResponseEnvelope<T> {
    /// Envelope for a singular resource. Never carries pagination metadata.
    #[must_use]
    pub fn single(data: T, status: u16, status_text: impl Into<String>) -> Self {
        wrap(data, status, status_text, None)
    }

    /// Shorthand for a `200 OK` singular envelope.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self::single(data, 200, "OK")
    }

    /// Payload carried by the envelope.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Consume the envelope, returning the payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Status code mirrored from the transport layer.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase accompanying [`Self::status`].
    #[must_use]
    pub fn status_text(&self) -> &str {
        self.status_text.as_str()
    }

    /// Pagination metadata, present only for list payloads.
    #[must_use]
    pub const fn meta(&self) -> Option<&Pagination> {
        self.meta.as_ref()
    }
}

impl<T> ResponseEnvelope<Vec<T>> {
    /// Envelope for one page of a list. Always carries pagination metadata.
    #[must_use]
    pub fn page(
        items: Vec<T>,
        status: u16,
        status_text: impl Into<String>,
        meta: Pagination,
    ) -> Self {
        wrap(items, status, status_text, Some(meta))
    }
}
