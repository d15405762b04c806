//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, bind_addr_from_env};

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::time::Duration;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use agenda::Trace;
#[cfg(debug_assertions)]
use agenda::doc::ApiDoc;
use agenda::domain::session::SESSION_COOKIE_PATH;
use agenda::inbound::http::auth::{logout_action, logout_transport, session_status};
use agenda::inbound::http::error::{json_error_handler, query_error_handler};
use agenda::inbound::http::health::{HealthState, live, ready};
use agenda::inbound::http::session_config::SessionSettings;
use agenda::inbound::http::validation::{get_schema, list_schemas, validate_payload};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn session_middleware(settings: &SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), settings.key.clone())
        .cookie_name("session".into())
        .cookie_path(SESSION_COOKIE_PATH.into())
        .cookie_secure(settings.cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(settings.same_site)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::hours(2)))
        .build()
}

fn build_app(
    health_state: web::Data<HealthState>,
    settings: &SessionSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    // Both session scopes share one key so a cookie issued under /api/v1 is
    // readable by the in-app logout action.
    let api = web::scope("/api/v1")
        .wrap(session_middleware(settings))
        .service(session_status)
        .service(list_schemas)
        .service(get_schema)
        .service(validate_payload);

    let actions = web::scope("/actions")
        .wrap(session_middleware(settings))
        .service(logout_action);

    // Transport logout deliberately runs without session middleware.
    let auth = web::scope("/api/auth").service(logout_transport);

    let app = App::new()
        .app_data(health_state)
        .app_data(web::Data::new(settings.logout_config()))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Trace)
        .service(api)
        .service(actions)
        .service(auth)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig { session, bind_addr } = config;
    let session = web::Data::new(session);

    let server = HttpServer::new(move || build_app(server_health_state.clone(), &session))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use actix_web::http::{StatusCode, header};
    use actix_web::test::{self as actix_test, TestRequest};
    use agenda::domain::session::RedirectTarget;

    fn settings() -> SessionSettings {
        SessionSettings {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
            login_path: RedirectTarget::try_new("/sign-in").expect("valid path"),
        }
    }

    #[actix_web::test]
    async fn app_outlives_the_settings_it_was_built_from() {
        let app = {
            let settings = settings();
            build_app(web::Data::new(HealthState::new()), &settings)
        };
        let app = actix_test::init_service(app).await;

        let res = actix_test::call_service(
            &app,
            TestRequest::post().uri("/api/auth/logout").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/sign-in")
        );
    }
}
