//! Account endpoints consumed by the web console.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use slash_api_models::{UpdateUserRequest, User};
use tracing::info;

use crate::http::errors::ApiError;
use crate::state::AppState;

/// `GET /api/v1/user/me`
pub(crate) async fn current_user(
    State(state): State<Arc<AppState>>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.current_user().await?;
    Ok(Json(user))
}

/// `PATCH /api/v1/user/{id}`
pub(crate) async fn update_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let Json(request) = request?;
    if request.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }
    info!(
        user_id = id,
        nickname = request.nickname.is_some(),
        email = request.email.is_some(),
        password = request.password.is_some(),
        "user update requested"
    );
    let user = state.users.update_user(id, request).await?;
    Ok(Json(user))
}
