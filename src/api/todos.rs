use axum::{Extension, Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::ApiError;
use super::guards::{CurrentTodo, CurrentUser};
use super::types::{CreateTodoRequest, UpdateTodoRequest};
use crate::models::Todo;
use crate::state::AppState;

/// GET /todos
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.todos_for(user.id).await?;
    Ok(Json(todos))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state
        .store
        .add_todo(user.id, payload.title, payload.deadline)
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
/// Overwrites title and deadline with the request values.
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(CurrentTodo(todo)): Extension<CurrentTodo>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .store
        .update_todo(user.id, todo.id, payload.title, payload.deadline)
        .await?;

    Ok(Json(todo))
}

/// PATCH /todos/{id}/done
pub async fn complete_todo(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(CurrentTodo(todo)): Extension<CurrentTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.complete_todo(user.id, todo.id).await?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(CurrentTodo(todo)): Extension<CurrentTodo>,
) -> Result<StatusCode, ApiError> {
    // The gate already proved the todo exists, but the store re-checks under
    // its own lock; a concurrent removal surfaces here as 404.
    state.store.remove_todo(user.id, todo.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
