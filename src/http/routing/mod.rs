pub mod todos;

use axum::{routing::get, Router};

use crate::application::todo_service::TodoService;

/// The complete HTTP surface: the todo endpoints plus a liveness probe.
pub fn app<S: TodoService + Clone>(service: S) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(todos::router(todos::AppState { service }))
}
