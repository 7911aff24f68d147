//! Serving the built web console.
//!
//! # Design
//! - Everything outside the reserved prefixes is the single-page app: unknown
//!   paths resolve to `index.html` so client-side routes survive a reload.
//! - `/assets` holds content-hashed bundles and is cached forever.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header::CACHE_CONTROL},
    middleware,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::http::constants::{ASSETS_CACHE_CONTROL, RESERVED_PREFIXES};
use crate::http::errors::ApiError;
use crate::state::AppState;

/// Whether `path` belongs to a handler other than the front-end.
pub(crate) fn is_reserved_path(path: &str) -> bool {
    path == "/api"
        || path == "/s"
        || RESERVED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// Static router for `<dist>/assets`. Only hits carry the immutable cache header.
pub(crate) fn assets_router(web_dist: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(web_dist.join("assets")))
        .layer(middleware::map_response(cache_found_assets))
}

async fn cache_found_assets(mut response: Response) -> Response {
    let status = response.status();
    if status.is_success() || status == StatusCode::NOT_MODIFIED {
        response.headers_mut().insert(
            CACHE_CONTROL,
            HeaderValue::from_static(ASSETS_CACHE_CONTROL),
        );
    }
    response
}

/// Fallback handler: SPA files with HTML5 history fallback.
pub(crate) async fn serve_frontend(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path();
    if is_reserved_path(path) {
        return ApiError::not_found(format!("no route for {path}")).into_response();
    }

    let index = state.web_dist.join("index.html");
    let service = ServeDir::new(&state.web_dist).fallback(ServeFile::new(index));
    match service.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
