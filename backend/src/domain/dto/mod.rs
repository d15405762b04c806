//! Typed request records and their registered schemas.
//!
//! Each record kind pairs a serde type with a static [`Schema`]. Schemas are
//! built lazily on first use; [`warm_schemas`] forces them at startup so a
//! malformed definition aborts the process before any request is served.

mod payment;
mod service;
mod user;

use std::fmt;
use std::str::FromStr;

pub use payment::{PaymentMethod, PaymentRecord, PaymentStatus};
pub use service::{ServiceCreate, ServiceUpdate};
pub use user::UserAvatarUpdate;

use super::validation::{Dto, Schema};

/// Registered record kinds, addressable by their kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtoKind {
    /// [`UserAvatarUpdate`].
    UserAvatar,
    /// [`ServiceCreate`].
    ServiceCreate,
    /// [`ServiceUpdate`].
    ServiceUpdate,
    /// [`PaymentRecord`].
    Payment,
}

/// Raised when a name does not match any registered kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind: {name}")]
pub struct UnknownDtoKind {
    name: String,
}

impl UnknownDtoKind {
    /// Name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl DtoKind {
    /// Every kind, in listing order.
    pub const ALL: [Self; 4] = [
        Self::UserAvatar,
        Self::ServiceCreate,
        Self::ServiceUpdate,
        Self::Payment,
    ];

    /// Kebab-case name used in routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserAvatar => "user-avatar",
            Self::ServiceCreate => "service-create",
            Self::ServiceUpdate => "service-update",
            Self::Payment => "payment",
        }
    }

    /// Schema registered for this kind.
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::UserAvatar => UserAvatarUpdate::schema(),
            Self::ServiceCreate => ServiceCreate::schema(),
            Self::ServiceUpdate => ServiceUpdate::schema(),
            Self::Payment => PaymentRecord::schema(),
        }
    }
}

impl fmt::Display for DtoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DtoKind {
    type Err = UnknownDtoKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownDtoKind { name: s.to_owned() })
    }
}

/// Build every registered schema, returning how many were built.
///
/// # Panics
/// Panics when a registered schema definition is malformed.
pub fn warm_schemas() -> usize {
    DtoKind::ALL.iter().map(|kind| kind.schema()).count()
}
