use axum::{Extension, Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::ApiError;
use super::guards::CurrentUser;
use super::types::CreateUserRequest;
use crate::models::User;
use crate::state::AppState;

/// POST /users
/// Register an account. Usernames are first come, first served.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .store
        .create_user(payload.name, payload.username)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}
pub async fn get_user(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(user)
}

/// PATCH /users/{id}/pro
/// Upgrade to the pro plan; the upgrade is one-way.
pub async fn activate_pro(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.activate_pro(user.id).await?;
    Ok(Json(user))
}
