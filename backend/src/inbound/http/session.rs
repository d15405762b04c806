//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! [`SessionContext`] wraps the Actix cookie session. Beyond reading the
//! signed-in state it is the session marker store used when a user logs out
//! from within the application: clearing the credential purges the session
//! so the middleware expires the `session` cookie.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::Error;
use crate::domain::session::{SessionMarker, SessionMarkerStore, SessionStoreError};

/// Session key holding the credential token.
pub const CREDENTIAL_KEY: &str = "credential";
/// Session key holding the identity marker.
pub const IDENTITY_KEY: &str = "user";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record a signed-in session.
    pub fn establish(&self, credential: &str, identity: &str) -> Result<(), Error> {
        self.0
            .insert(CREDENTIAL_KEY, credential)
            .and_then(|()| self.0.insert(IDENTITY_KEY, identity))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Credential token, if the session carries one.
    pub fn credential(&self) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(CREDENTIAL_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Whether the session holds a non-empty credential.
    ///
    /// A credential that cannot be decoded counts as signed out.
    pub fn is_authenticated(&self) -> bool {
        match self.credential() {
            Ok(credential) => credential.is_some_and(|token| !token.is_empty()),
            Err(error) => {
                warn!(%error, "unreadable session credential");
                false
            }
        }
    }
}

impl SessionMarkerStore for SessionContext {
    fn clear(&mut self, marker: SessionMarker) -> Result<(), SessionStoreError> {
        match marker {
            SessionMarker::Credential => {
                // Read before purging so an unreadable store is still reported.
                let readable = self.0.get::<String>(CREDENTIAL_KEY);
                self.0.remove(CREDENTIAL_KEY);
                self.0.purge();
                readable
                    .map(|_| ())
                    .map_err(SessionStoreError::unavailable)
            }
            SessionMarker::Identity => {
                self.0.remove(IDENTITY_KEY);
                Ok(())
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
