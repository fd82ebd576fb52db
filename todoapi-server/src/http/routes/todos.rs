//! Todo endpoints
//!
//! Handlers only extract arguments, call [`TodoRepo`] and serialize the
//! result; all errors go through [`ApiError`].

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::Todo;
use crate::http::error::ApiError;
use crate::http::extractors::{AppJson, ValidTodoId};
use crate::http::server::AppState;
use crate::models::TodoTitle;

/// Create todo request
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// POST /todo - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let title = TodoTitle::new(&req.title)?;
    let todo = state.todos().create(&title, req.completed).await?;

    tracing::info!(id = todo.id, "todo created");
    Ok(Json(todo))
}

/// GET /todos - list all todos, newest first
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos().list().await?;
    Ok(Json(todos))
}

/// GET /todos/{id} - get a single todo
async fn get_todo(
    State(state): State<Arc<AppState>>,
    ValidTodoId(id): ValidTodoId,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos().get(id).await?;
    Ok(Json(todo))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todo", post(create_todo))
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
}
