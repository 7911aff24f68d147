//! Liveness endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::config::AppMode;
use crate::state::AppState;
use crate::telemetry::build_version;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) mode: AppMode,
    pub(crate) version: &'static str,
}

pub(crate) async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        mode: state.mode,
        version: build_version(),
    })
}
