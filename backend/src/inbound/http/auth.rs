//! Session probe and logout endpoints.
//!
//! ```text
//! POST /actions/logout   Log out from within the application (session scope)
//! POST /api/auth/logout  Log out through a bare transport call
//! GET  /api/v1/session   Report whether the caller is signed in
//! ```
//!
//! Both logout routes run [`invalidate`] and answer `303 See Other` to the
//! login page. The in-app action clears the live session and also expires
//! each marker cookie; the transport call has no session middleware and only
//! expires the cookies.

use actix_web::cookie::SameSite;
use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder, get, post, web};
use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::domain::session::{RedirectTarget, invalidate};
use crate::inbound::http::cookies::CookieInstructions;
use crate::inbound::http::envelope::Enveloped;
use crate::inbound::http::schemas::SessionStatusEnvelopeSchema;
use crate::inbound::http::session::SessionContext;

/// Redirect and cookie attributes shared by the logout handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutConfig {
    /// Where clients land after logging out.
    pub login_path: RedirectTarget,
    /// `Secure` flag for removal cookies.
    pub cookie_secure: bool,
    /// `SameSite` policy for removal cookies.
    pub same_site: SameSite,
}

impl Default for LogoutConfig {
    fn default() -> Self {
        Self {
            login_path: RedirectTarget::default(),
            cookie_secure: true,
            same_site: SameSite::Lax,
        }
    }
}

impl LogoutConfig {
    fn resolve(config: Option<web::Data<Self>>) -> Self {
        config.map_or_else(
            || {
                debug!("logout configuration missing; using defaults");
                Self::default()
            },
            |data| data.get_ref().clone(),
        )
    }

    fn cookie_instructions(&self) -> CookieInstructions {
        CookieInstructions::new(self.cookie_secure, self.same_site)
    }
}

/// Signed-in state reported by [`session_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionStatus {
    /// Whether the session carries a credential.
    pub authenticated: bool,
}

fn see_other(target: &RedirectTarget) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder
        .insert_header((header::LOCATION, target.as_str()))
        .insert_header((header::CACHE_CONTROL, "no-store"));
    builder
}

fn expire_with_cookies(config: &LogoutConfig) -> HttpResponse {
    let mut instructions = config.cookie_instructions();
    let outcome = invalidate(&mut instructions, &config.login_path);
    let mut response = see_other(outcome.redirect_to());
    instructions.apply_to(&mut response);
    response.finish()
}

/// Log out from within the application.
///
/// Clears the live session and always answers with removal cookies for both
/// markers, so a client-held `user` cookie is expired along with the session.
/// The session extractor never fails; store faults while clearing are logged
/// and the removal cookies still go out.
#[utoipa::path(
    post,
    path = "/actions/logout",
    responses(
        (status = 303, description = "Session cleared; redirect to the login page",
            headers(
                ("Location" = String, description = "Login page path"),
                ("Set-Cookie" = String, description = "Removal cookies for session and user")
            ))
    ),
    tags = ["session"],
    operation_id = "logoutAction"
)]
#[post("/logout")]
pub async fn logout_action(
    mut session: SessionContext,
    config: Option<web::Data<LogoutConfig>>,
) -> HttpResponse {
    let config = LogoutConfig::resolve(config);
    let outcome = invalidate(&mut session, &config.login_path);
    if !outcome.is_clean() {
        warn!(
            faults = outcome.faults().len(),
            "session cleared with faults; markers expire by cookie"
        );
    }
    expire_with_cookies(&config)
}

/// Log out through a bare transport call.
///
/// Takes no body and needs no session. Always answers with removal cookies
/// for `session` and `user` (empty value, `Max-Age=0`, `Path=/`).
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 303, description = "Session markers expired; redirect to the login page",
            headers(
                ("Location" = String, description = "Login page path"),
                ("Set-Cookie" = String, description = "Removal cookies for session and user")
            ))
    ),
    tags = ["session"],
    operation_id = "logoutTransport"
)]
#[post("/logout")]
pub async fn logout_transport(config: Option<web::Data<LogoutConfig>>) -> HttpResponse {
    expire_with_cookies(&LogoutConfig::resolve(config))
}

/// Report whether the current session is signed in.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Session state", body = SessionStatusEnvelopeSchema)
    ),
    tags = ["session"],
    operation_id = "sessionStatus"
)]
#[get("/session")]
pub async fn session_status(session: SessionContext) -> Enveloped<SessionStatus> {
    Enveloped::ok(SessionStatus {
        authenticated: session.is_authenticated(),
    })
}
