use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, patch, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;
use crate::store::Store;

mod error;
pub mod guards;
mod todos;
mod types;
mod users;

pub use error::ApiError;
pub use guards::{CurrentTodo, CurrentUser};
pub use types::*;

#[must_use]
pub fn create_app_state(config: Config) -> Arc<AppState> {
    Arc::new(AppState {
        store: Store::new(),
        config,
    })
}

#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let user_routes = Router::new()
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}/pro", patch(users::activate_pro))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_user_by_id,
        ));

    let todo_list_routes = Router::new()
        .route("/todos", get(todos::list_todos))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_user_by_header,
        ));

    // Layer order matters: the header gate attaches the user the quota gate
    // reads, so it must sit outermost (last added).
    let todo_create_routes = Router::new()
        .route("/todos", post(todos::create_todo))
        .route_layer(middleware::from_fn(guards::require_todo_quota))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_user_by_header,
        ));

    let todo_item_routes = Router::new()
        .route("/todos/{id}", put(todos::update_todo))
        .route("/todos/{id}/done", patch(todos::complete_todo))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_todo,
        ));

    let todo_delete_routes = Router::new()
        .route("/todos/{id}", delete(todos::delete_todo))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_todo,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_user_by_header,
        ));

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/users", post(users::create_user))
        .merge(user_routes)
        .merge(todo_list_routes)
        .merge(todo_create_routes)
        .merge(todo_item_routes)
        .merge(todo_delete_routes)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
