//! Router construction and server host for the console.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Request, State},
    http::{Method, header::CONTENT_TYPE},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Span, info, warn};

use crate::error::{ServerError, ServerResult};
use crate::http::constants::REQUEST_TIMEOUT;
use crate::http::errors::ApiError;
use crate::http::frontend::{assets_router, serve_frontend};
use crate::http::health::health;
use crate::http::user::{current_user, update_user};
use crate::state::AppState;
use crate::telemetry::build_version;

/// Axum router wrapper that hosts the console and its API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Wire routes and middleware around the shared state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::PATCH, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    uri = %request.uri().path(),
                    version = %build_version(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request, _span: &Span| {})
            .on_response(|response: &Response, latency: Duration, span: &Span| {
                span.record("status_code", response.status().as_u16());
                let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                span.record("latency_ms", latency_ms);
            });

        let assets = assets_router(&state.web_dist);
        let router = Router::new()
            .route("/health", get(health))
            .nest("/api/v1", Self::v1_routes())
            .nest_service("/assets", assets)
            .fallback(serve_frontend)
            .layer(middleware::from_fn_with_state(
                REQUEST_TIMEOUT,
                enforce_timeout,
            ))
            .layer(trace_layer)
            .layer(CompressionLayer::new())
            .layer(cors_layer)
            .with_state(state);

        Self { router }
    }

    fn v1_routes() -> Router<Arc<AppState>> {
        Router::new()
            .route("/user/me", get(current_user))
            .route("/user/{id}", patch(update_user))
    }

    /// Consume the server and expose the underlying router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve on `addr` until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot be bound or serving fails.
    pub async fn serve<F>(self, addr: SocketAddr, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        info!(%addr, "slash server listening");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ServerError::Serve { source })
    }
}

async fn enforce_timeout(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(%path, "request timed out");
            ApiError::request_timeout().into_response()
        }
    }
}
