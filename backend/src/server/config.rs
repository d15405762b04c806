//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use agenda::inbound::http::session_config::SessionSettings;
use mockable::Env;

const BIND_ADDR_ENV: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Everything the server needs beyond its handlers.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Combine session settings with the listen address.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self { session, bind_addr }
    }
}

/// Listen address from `BIND_ADDR`, defaulting to `0.0.0.0:8080`.
///
/// # Errors
/// Returns [`std::io::Error`] with `InvalidInput` when the value is not a
/// socket address.
pub fn bind_addr_from_env<E: Env>(env: &E) -> std::io::Result<SocketAddr> {
    let raw = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    raw.parse().map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid {BIND_ADDR_ENV}='{raw}': {err}"),
        )
    })
}
