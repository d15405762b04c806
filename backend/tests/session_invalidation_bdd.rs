//! Behaviour tests for the two logout entry points.
//!
//! These scenarios drive a full app with shared session keys, replaying the
//! cookies a browser would hold between requests.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, Key};
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, HttpResponse, web};
use agenda::domain::Error;
use agenda::inbound::http::auth::{LogoutConfig, logout_action, logout_transport, session_status};
use agenda::inbound::http::session::SessionContext;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

#[derive(Debug)]
struct Outcome {
    status: StatusCode,
    location: Option<String>,
    set_cookies: Vec<Cookie<'static>>,
    body: Option<Value>,
}

struct SessionWorld {
    key: Key,
    jar: RefCell<Vec<Cookie<'static>>>,
    last: RefCell<Option<Outcome>>,
}

impl SessionWorld {
    fn new() -> Self {
        Self {
            key: Key::generate(),
            jar: RefCell::new(Vec::new()),
            last: RefCell::new(None),
        }
    }

    fn session_middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name("session".to_owned())
            .cookie_secure(false)
            .build()
    }

    /// Send `req` through a freshly built app, carrying and updating the jar.
    fn perform(&self, req: TestRequest) -> Outcome {
        let cookies = self.jar.borrow().clone();
        let actions = web::scope("/actions")
            .wrap(self.session_middleware())
            .service(logout_action);
        let api = web::scope("/api/v1")
            .wrap(self.session_middleware())
            .service(session_status)
            .route("/sign-in", web::post().to(sign_in));
        let config = LogoutConfig {
            cookie_secure: false,
            ..LogoutConfig::default()
        };

        let outcome = actix_rt::System::new().block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(config))
                    .service(actions)
                    .service(web::scope("/api/auth").service(logout_transport))
                    .service(api),
            )
            .await;
            let req = cookies
                .into_iter()
                .fold(req, |req, cookie| req.cookie(cookie));
            let res = test::call_service(&app, req.to_request()).await;
            let status = res.status();
            let location = res
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let set_cookies: Vec<_> = res
                .response()
                .cookies()
                .map(Cookie::into_owned)
                .collect();
            let bytes = test::read_body(res).await;
            let body = serde_json::from_slice(&bytes).ok();
            Outcome {
                status,
                location,
                set_cookies,
                body,
            }
        });

        let mut jar = self.jar.borrow_mut();
        for cookie in &outcome.set_cookies {
            jar.retain(|held| held.name() != cookie.name());
            if !is_removal(cookie) {
                jar.push(cookie.clone());
            }
        }
        outcome
    }

    fn record(&self, outcome: Outcome) {
        *self.last.borrow_mut() = Some(outcome);
    }

    fn with_last<F>(&self, f: F)
    where
        F: FnOnce(&Outcome),
    {
        let last = self.last.borrow();
        f(last.as_ref().expect("a request was sent"));
    }
}

async fn sign_in(session: SessionContext) -> Result<HttpResponse, Error> {
    session.establish("token-1", "ada")?;
    Ok(HttpResponse::NoContent().finish())
}

fn is_removal(cookie: &Cookie<'_>) -> bool {
    cookie.value().is_empty() && cookie.max_age() == Some(Duration::ZERO)
}

#[fixture]
fn world() -> SessionWorld {
    SessionWorld::new()
}

#[given("a signed-in visitor")]
fn a_signed_in_visitor(world: &SessionWorld) {
    let outcome = world.perform(TestRequest::post().uri("/api/v1/sign-in"));
    assert_eq!(outcome.status, StatusCode::NO_CONTENT);
    assert!(
        world.jar.borrow().iter().any(|cookie| cookie.name() == "session"),
        "sign-in should issue a session cookie"
    );
}

#[given("a visitor without cookies")]
fn a_visitor_without_cookies(world: &SessionWorld) {
    assert!(world.jar.borrow().is_empty());
}

#[when("the visitor signs out through the app action")]
fn signs_out_through_action(world: &SessionWorld) {
    let outcome = world.perform(TestRequest::post().uri("/actions/logout"));
    world.record(outcome);
}

#[when("the visitor signs out through the transport endpoint")]
fn signs_out_through_transport(world: &SessionWorld) {
    let outcome = world.perform(TestRequest::post().uri("/api/auth/logout"));
    world.record(outcome);
}

#[then("the response redirects to {location}")]
fn response_redirects(world: &SessionWorld, location: String) {
    world.with_last(|outcome| {
        assert_eq!(outcome.status, StatusCode::SEE_OTHER);
        assert_eq!(outcome.location.as_deref(), Some(location.as_str()));
        assert!(outcome.body.is_none(), "redirects carry no JSON body");
    });
}

#[then("the {name} cookie is expired")]
fn cookie_is_expired(world: &SessionWorld, name: String) {
    world.with_last(|outcome| {
        let cookie = outcome
            .set_cookies
            .iter()
            .find(|cookie| cookie.name() == name)
            .unwrap_or_else(|| panic!("{name} cookie should be set"));
        assert!(is_removal(cookie), "{name} cookie should be a removal");
        assert_eq!(cookie.path(), Some("/"));
    });
}

#[then("the visitor is no longer authenticated")]
fn no_longer_authenticated(world: &SessionWorld) {
    assert!(
        !world.jar.borrow().iter().any(|cookie| cookie.name() == "session"),
        "session cookie should have been cleared"
    );
    let outcome = world.perform(TestRequest::get().uri("/api/v1/session"));
    assert_eq!(outcome.status, StatusCode::OK);
    let body = outcome.body.expect("session status body");
    assert_eq!(body["data"]["authenticated"], Value::Bool(false));
}

#[scenario(
    path = "tests/features/session_invalidation.feature",
    name = "Signing out through the app action ends the session"
)]
fn action_logout(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_invalidation.feature",
    name = "Signing out through the transport endpoint expires both markers"
)]
fn transport_logout(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_invalidation.feature",
    name = "Signing out twice stays harmless"
)]
fn repeated_logout(world: SessionWorld) {
    drop(world);
}
