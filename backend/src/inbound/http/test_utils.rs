//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    test_session_middleware_with_key(Key::generate())
}

/// Session middleware sharing `key`, for apps with several session scopes.
pub fn test_session_middleware_with_key(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// First `Set-Cookie` named `name` on a response.
pub fn response_cookie<B>(res: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(Cookie::into_owned)
}

/// The `session` cookie set on a response, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response_cookie(res, "session")
}

/// Whether `cookie` instructs the client to forget it.
pub fn is_removal(cookie: &Cookie<'_>) -> bool {
    cookie.value().is_empty() && cookie.max_age() == Some(Duration::ZERO)
}

/// Minimal browser-side cookie store keyed by name.
#[derive(Debug, Default)]
pub struct CookieJar(Vec<Cookie<'static>>);

impl CookieJar {
    /// Apply every `Set-Cookie` on `res`, dropping expired cookies.
    pub fn absorb<B>(&mut self, res: &ServiceResponse<B>) {
        for cookie in res.response().cookies() {
            self.0.retain(|held| held.name() != cookie.name());
            if !is_removal(&cookie) {
                self.0.push(cookie.into_owned());
            }
        }
    }

    /// Send every held cookie with `req`.
    pub fn attach(&self, req: TestRequest) -> TestRequest {
        self.0
            .iter()
            .cloned()
            .fold(req, |req, cookie| req.cookie(cookie))
    }

    /// Whether a cookie named `name` is held.
    pub fn holds(&self, name: &str) -> bool {
        self.0.iter().any(|cookie| cookie.name() == name)
    }
}
