use axum::{
    Extension,
    extract::{Path, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ApiError;
use crate::constants::limits;
use crate::models::{Todo, User};
use crate::state::AppState;

/// User resolved by a gate, cloned out of the store and attached to the
/// request for the stages behind it.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Todo resolved by [`require_todo`].
#[derive(Debug, Clone)]
pub struct CurrentTodo(pub Todo);

fn header_username(headers: &HeaderMap) -> Option<&str> {
    headers.get("username").and_then(|value| value.to_str().ok())
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_id())
}

/// Resolve the caller from the `username` header. A missing header is
/// indistinguishable from an unknown user.
pub async fn require_user_by_header(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = header_username(request.headers())
        .map(ToOwned::to_owned)
        .ok_or_else(ApiError::user_not_found)?;

    let user = state
        .store
        .find_user_by_username(&username)
        .await
        .ok_or_else(ApiError::user_not_found)?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Pass pro accounts through unconditionally; free accounts only while they
/// are under the creation cap. Expects `require_user_by_header` in front.
pub async fn require_todo_quota(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if user.pro || user.todos.len() < limits::FREE_TODOS {
        Ok(next.run(request).await)
    } else {
        Err(ApiError::not_pro())
    }
}

/// Re-resolve the caller from the `username` header, validate the `id` path
/// parameter, and find the todo inside that user's own collection. Attaches
/// both the user and the todo.
pub async fn require_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = header_username(request.headers())
        .map(ToOwned::to_owned)
        .ok_or_else(ApiError::user_not_found)?;

    let user = state
        .store
        .find_user_by_username(&username)
        .await
        .ok_or_else(ApiError::user_not_found)?;

    let id = parse_id(&id)?;
    let todo = user
        .todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .ok_or_else(ApiError::todo_not_found)?;

    request.extensions_mut().insert(CurrentUser(user));
    request.extensions_mut().insert(CurrentTodo(todo));
    Ok(next.run(request).await)
}

/// Validate the `id` path parameter and resolve the user it names.
pub async fn require_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;

    let user = state
        .store
        .find_user_by_id(id)
        .await
        .ok_or_else(ApiError::user_not_found)?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_id() {
        assert!(parse_id("3f6e35f4-22bb-4b04-a57e-6bbf3f37f286").is_ok());
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("3f6e35f4-22bb-4b04-a57e").is_err());
    }

    #[test]
    fn test_header_username() {
        let mut headers = HeaderMap::new();
        assert!(header_username(&headers).is_none());

        headers.insert("username", HeaderValue::from_static("ann"));
        assert_eq!(header_username(&headers), Some("ann"));
    }
}
