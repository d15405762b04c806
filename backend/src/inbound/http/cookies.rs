//! Cookie removal instructions for callers without a live session context.
//!
//! Bare transport calls reach the logout endpoint without passing through
//! the session middleware, so there is no session to purge. The markers are
//! instead expired on the client by sending one removal cookie per marker.

use actix_web::HttpResponseBuilder;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

use crate::domain::session::{
    SESSION_COOKIE_PATH, SessionMarker, SessionMarkerStore, SessionStoreError,
};

/// Buffer of removal cookies recorded while invalidating a session.
///
/// # Examples
/// ```
/// use actix_web::cookie::SameSite;
/// use agenda::domain::session::{invalidate, RedirectTarget};
/// use agenda::inbound::http::cookies::CookieInstructions;
///
/// let mut instructions = CookieInstructions::new(true, SameSite::Lax);
/// invalidate(&mut instructions, &RedirectTarget::default());
/// let names: Vec<_> = instructions.cookies().iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["session", "user"]);
/// ```
#[derive(Debug, Clone)]
pub struct CookieInstructions {
    secure: bool,
    same_site: SameSite,
    cookies: Vec<Cookie<'static>>,
}

impl CookieInstructions {
    /// Start an empty buffer; removal cookies carry the given attributes so
    /// browsers match them against the cookies being expired.
    #[must_use]
    pub const fn new(secure: bool, same_site: SameSite) -> Self {
        Self {
            secure,
            same_site,
            cookies: Vec::new(),
        }
    }

    /// Removal cookies recorded so far, in clearing order.
    #[must_use]
    pub fn cookies(&self) -> &[Cookie<'static>] {
        &self.cookies
    }

    /// Attach every recorded removal cookie to `response`.
    pub fn apply_to(&self, response: &mut HttpResponseBuilder) {
        for cookie in &self.cookies {
            response.cookie(cookie.clone());
        }
    }

    fn removal_cookie(&self, marker: SessionMarker) -> Cookie<'static> {
        Cookie::build(marker.cookie_name(), "")
            .path(SESSION_COOKIE_PATH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .finish()
    }
}

impl SessionMarkerStore for CookieInstructions {
    fn clear(&mut self, marker: SessionMarker) -> Result<(), SessionStoreError> {
        let cookie = self.removal_cookie(marker);
        self.cookies.retain(|recorded| recorded.name() != cookie.name());
        self.cookies.push(cookie);
        Ok(())
    }
}
