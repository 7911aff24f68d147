#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Slash console server.
//!
//! Layout: `config.rs` (environment), `telemetry.rs` (logging), `users.rs`
//! (user directory), `http/` (routes, front-end embedding), `bootstrap.rs` (wiring).

/// Boot sequence.
pub mod bootstrap;
/// Environment-backed configuration.
pub mod config;
/// Crate-level error type.
pub mod error;
/// HTTP routing and handlers.
pub mod http;
/// Shared handler state.
pub mod state;
/// Logging initialisation.
pub mod telemetry;
/// User directory.
pub mod users;

pub use bootstrap::run_app;
pub use config::{AppMode, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use http::router::ApiServer;
pub use state::AppState;
