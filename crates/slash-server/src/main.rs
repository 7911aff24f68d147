#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_docs)]

//! Binary entrypoint that serves the Slash web console.

use slash_server::{ServerResult, run_app};

/// Boots the server and blocks until shutdown.
#[tokio::main]
async fn main() -> ServerResult<()> {
    run_app().await
}
