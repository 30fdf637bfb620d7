use std::net::SocketAddr;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_strict_flag,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Browser origin allowed to call the API with credentials. CORS is disabled when unset.
    pub cors_allowed_origin: Option<String>,
    /// Whether the session cookie is marked `Secure`.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        let session_secure = session_secure(optional_var("SESSION_SECURE"))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
            session_secure,
        })
    }
}

/// Interprets `SESSION_SECURE`, defaulting to a secure cookie when unset.
///
/// # Returns
/// - `Ok(bool)` - Unset, or an on/off flag value
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - Value is neither on nor off
fn session_secure(value: Option<String>) -> Result<bool, AppError> {
    let Some(value) = value else {
        return Ok(true);
    };

    parse_strict_flag(&value).ok_or_else(|| {
        ConfigError::InvalidEnvVar {
            name: "SESSION_SECURE".to_string(),
            value,
        }
        .into()
    })
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
