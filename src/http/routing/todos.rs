use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tracing::{debug, info};

use crate::{
    application::todo_service::TodoService,
    domain::todo::{TodoId, TodoItem},
    http::types::ApiError,
};

pub const BASE_PATH: &str = "/api/todo";

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route(BASE_PATH, get(list_todos::<S>).post(create_todo::<S>))
        .route(&format!("{BASE_PATH}/:id"), get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let items = state.service.get_all().await?;
    debug!(count = items.len(), "listing todo items");
    Ok(Json(items))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<TodoId>) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(state.service.get_by_id(id).await?))
}

/// Responds 201 with a `Location` pointing at the new item.
async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, Json(item): Json<TodoItem>) -> Result<impl IntoResponse, ApiError> {
    let created = state.service.create(item).await?;
    let location = format!("{BASE_PATH}/{}", created.id);
    info!(id = %created.id, "created todo item");
    Ok((StatusCode::CREATED, [(::http::header::LOCATION, location)], Json(created)))
}

/// The ids are compared before the service is touched, so a mismatch never
/// reaches storage.
async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<TodoId>, Json(item): Json<TodoItem>) -> Result<StatusCode, ApiError> {
    if id != item.id {
        return Err(ApiError::IdMismatch { path: id, body: item.id });
    }
    state.service.update(item).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<TodoId>) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
