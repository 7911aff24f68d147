//! # Design
//!
//! - Provide a single crate-level error type for server bootstrap/serve failures.
//! - Keep error messages constant; capture operational context in structured fields.
//! - Preserve sources for diagnostics without double-logging.

use std::net::SocketAddr;

use thiserror::Error;

use crate::users::UserError;

/// Result alias for server operations.
pub type ServerResult<T> = std::result::Result<T, ServerError>;

/// Errors raised while bootstrapping or serving the console.
#[derive(Debug, Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid environment variable")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
    /// Installing the tracing subscriber failed.
    #[error("failed to initialise telemetry")]
    Telemetry {
        /// Rendered failure from the subscriber.
        detail: String,
    },
    /// Seeding the owner account failed.
    #[error("failed to seed the owner account")]
    OwnerSeed {
        /// Underlying directory error.
        #[source]
        source: UserError,
    },
    /// Binding the listener failed.
    #[error("failed to bind listener")]
    Bind {
        /// Address attempted.
        addr: SocketAddr,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Serving requests failed.
    #[error("server terminated unexpectedly")]
    Serve {
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
