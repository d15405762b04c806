//! Session invalidation.
//!
//! A session is represented on the client by two markers: the credential
//! token and an auxiliary identity marker. Logging out removes both and sends
//! the caller to the login page. Both logout entry points run the same
//! [`invalidate`] routine against different [`SessionMarkerStore`]s: the
//! actix session for user-initiated actions and a cookie instruction buffer
//! for bare transport calls.

use std::fmt;

use tracing::{debug, warn};

/// Default destination after a session has been invalidated.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Path scope shared by every session marker cookie.
pub const SESSION_COOKIE_PATH: &str = "/";

/// Client-held markers that together make up a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionMarker {
    /// Credential token proving authentication.
    Credential,
    /// Auxiliary marker describing the signed-in user.
    Identity,
}

impl SessionMarker {
    /// Every marker in clearing order: credential first.
    pub const ALL: [Self; 2] = [Self::Credential, Self::Identity];

    /// Name of the cookie holding this marker.
    #[must_use]
    pub const fn cookie_name(self) -> &'static str {
        match self {
            Self::Credential => "session",
            Self::Identity => "user",
        }
    }
}

impl fmt::Display for SessionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cookie_name())
    }
}

/// Failure reported by a session store while clearing a marker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// The session context could not be read or written.
    #[error("session context unavailable: {reason}")]
    Unavailable {
        /// What went wrong.
        reason: String,
    },
}

impl SessionStoreError {
    /// Build an [`SessionStoreError::Unavailable`] from any displayable cause.
    pub fn unavailable(reason: impl fmt::Display) -> Self {
        Self::Unavailable {
            reason: reason.to_string(),
        }
    }
}

/// Port over wherever the session markers live.
///
/// Clearing an absent marker must succeed so invalidation stays idempotent.
pub trait SessionMarkerStore {
    /// Remove `marker` from the client context.
    fn clear(&mut self, marker: SessionMarker) -> Result<(), SessionStoreError>;
}

/// Raised when a redirect target is not an absolute path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("redirect target must be an absolute path, got {target:?}")]
pub struct RedirectTargetError {
    target: String,
}

/// Local path the client is sent to after invalidation.
///
/// Only absolute paths are accepted so the redirect can never leave the site.
///
/// # Examples
/// ```
/// use agenda::domain::session::RedirectTarget;
///
/// assert_eq!(RedirectTarget::default().as_str(), "/login");
/// assert!(RedirectTarget::try_new("https://evil.example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    /// Validate and wrap `target`.
    pub fn try_new(target: impl Into<String>) -> Result<Self, RedirectTargetError> {
        let target = target.into();
        if !target.starts_with('/') || target.starts_with("//") {
            return Err(RedirectTargetError { target });
        }
        Ok(Self(target))
    }

    /// Borrow the path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for RedirectTarget {
    fn default() -> Self {
        Self(DEFAULT_LOGIN_PATH.to_owned())
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A marker the store failed to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFault {
    /// Marker that may still be present.
    pub marker: SessionMarker,
    /// Store failure.
    pub error: SessionStoreError,
}

/// Result of [`invalidate`]: always a redirect, plus any swallowed faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationOutcome {
    redirect_to: RedirectTarget,
    faults: Vec<MarkerFault>,
}

impl InvalidationOutcome {
    /// Where the client must go next.
    #[must_use]
    pub const fn redirect_to(&self) -> &RedirectTarget {
        &self.redirect_to
    }

    /// Markers the store could not clear.
    #[must_use]
    pub fn faults(&self) -> &[MarkerFault] {
        &self.faults
    }

    /// Whether every marker was cleared without a fault.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Clear every session marker from `store` and produce the login redirect.
///
/// Every marker is attempted even when an earlier one fails. Store faults are
/// logged and reported in the outcome but never prevent the redirect, so
/// invalidating an already-empty session is a no-op that still redirects.
///
/// # Examples
/// ```
/// use agenda::domain::session::{
///     invalidate, RedirectTarget, SessionMarker, SessionMarkerStore, SessionStoreError,
/// };
///
/// #[derive(Default)]
/// struct Recorder(Vec<SessionMarker>);
///
/// impl SessionMarkerStore for Recorder {
///     fn clear(&mut self, marker: SessionMarker) -> Result<(), SessionStoreError> {
///         self.0.push(marker);
///         Ok(())
///     }
/// }
///
/// let mut store = Recorder::default();
/// let outcome = invalidate(&mut store, &RedirectTarget::default());
/// assert!(outcome.is_clean());
/// assert_eq!(store.0, SessionMarker::ALL);
/// ```
pub fn invalidate<S>(store: &mut S, target: &RedirectTarget) -> InvalidationOutcome
where
    S: SessionMarkerStore + ?Sized,
{
    let mut faults = Vec::new();
    for marker in SessionMarker::ALL {
        match store.clear(marker) {
            Ok(()) => debug!(%marker, "session marker cleared"),
            Err(error) => {
                warn!(%marker, %error, "failed to clear session marker");
                faults.push(MarkerFault { marker, error });
            }
        }
    }
    debug!(redirect_to = %target, faults = faults.len(), "session invalidated");
    InvalidationOutcome {
        redirect_to: target.clone(),
        faults,
    }
}
