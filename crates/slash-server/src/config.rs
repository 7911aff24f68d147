//! Environment-backed server configuration.
//!
//! # Design
//! - Resolve every knob once at boot; handlers only see the resolved values.
//! - Read through a lookup function so tests never mutate process env.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{ServerError, ServerResult};
use crate::telemetry::LogFormat;

/// Port used when `SLASH_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8082;
/// Front-end build directory used when `SLASH_WEB_DIST` is unset.
pub const DEFAULT_WEB_DIST: &str = "web/dist";

const ENV_MODE: &str = "SLASH_MODE";
const ENV_ADDR: &str = "SLASH_ADDR";
const ENV_PORT: &str = "SLASH_PORT";
const ENV_WEB_DIST: &str = "SLASH_WEB_DIST";
const ENV_LOG_FORMAT: &str = "SLASH_LOG_FORMAT";
const ENV_OWNER_USERNAME: &str = "SLASH_OWNER_USERNAME";
const ENV_OWNER_NICKNAME: &str = "SLASH_OWNER_NICKNAME";
const ENV_OWNER_EMAIL: &str = "SLASH_OWNER_EMAIL";
const ENV_OWNER_PASSWORD: &str = "SLASH_OWNER_PASSWORD";

/// Deployment profile the server runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Local development.
    Dev,
    /// Production deployment.
    Prod,
    /// Public demo instance.
    Demo,
}

impl AppMode {
    /// Stable string form used in logs and health payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
            Self::Demo => "demo",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" => Some(Self::Dev),
            "prod" => Some(Self::Prod),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

/// Credentials and profile of the account created at boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSeed {
    /// Login name.
    pub username: String,
    /// Display name.
    pub nickname: String,
    /// Contact email.
    pub email: String,
    /// Plaintext password, hashed when seeded.
    pub password: String,
}

impl Default for OwnerSeed {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            nickname: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        }
    }
}

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment profile.
    pub mode: AppMode,
    /// Listener address.
    pub bind_addr: SocketAddr,
    /// Directory holding the built web console.
    pub web_dist: PathBuf,
    /// Log output format.
    pub log_format: LogFormat,
    /// Owner account seeded into the user directory.
    pub owner: OwnerSeed,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when a variable cannot be parsed.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when a variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mode = match read(ENV_MODE) {
            Some(value) => AppMode::parse(&value).ok_or(ServerError::InvalidEnv {
                name: ENV_MODE,
                value,
            })?,
            None => AppMode::Dev,
        };

        let ip = match read(ENV_ADDR) {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ServerError::InvalidEnv {
                    name: ENV_ADDR,
                    value,
                })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match read(ENV_PORT) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::InvalidEnv {
                    name: ENV_PORT,
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let log_format = match read(ENV_LOG_FORMAT) {
            Some(value) => LogFormat::parse(&value).ok_or(ServerError::InvalidEnv {
                name: ENV_LOG_FORMAT,
                value,
            })?,
            None => LogFormat::infer(),
        };

        let defaults = OwnerSeed::default();
        let owner = OwnerSeed {
            username: read(ENV_OWNER_USERNAME).unwrap_or(defaults.username),
            nickname: read(ENV_OWNER_NICKNAME).unwrap_or(defaults.nickname),
            email: read(ENV_OWNER_EMAIL).unwrap_or(defaults.email),
            password: read(ENV_OWNER_PASSWORD).unwrap_or(defaults.password),
        };

        Ok(Self {
            mode,
            bind_addr: SocketAddr::new(ip, port),
            web_dist: read(ENV_WEB_DIST).map_or_else(|| PathBuf::from(DEFAULT_WEB_DIST), PathBuf::from),
            log_format,
            owner,
        })
    }
}
