//! Backend entry-point: loads session settings, warms DTO schemas, and
//! serves the validation, session, and health endpoints.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use agenda::domain::dto::warm_schemas;
use agenda::inbound::http::health::HealthState;
use agenda::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{ServerConfig, bind_addr_from_env, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %session.key_fingerprint(),
        login_path = %session.login_path,
        "session settings loaded"
    );

    // Malformed schemas panic here rather than on the first request.
    let schemas = warm_schemas();
    info!(schemas, "DTO schemas ready");

    let bind_addr = bind_addr_from_env(&env)?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(session, bind_addr))?;
    info!(%bind_addr, "listening");
    server.await
}
