//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod cookies;
pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
