//! Handlers for the todo resource.
//!
//! Extraction and DTO validation failures become [`AppError`]s (400). Once the
//! request reaches the service, whatever envelope it returns is the response.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use todos_core::types::DbId;
use todos_db::models::todo::{CreateTodo, UpdateTodo};
use validator::Validate;

use crate::error::AppResult;
use crate::query::ListTodosParams;
use crate::state::AppState;

/// POST /api/v1/todos
///
/// Create a todo. Responds 201 on success.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = body?;
    input.validate()?;

    let envelope = state.todos.create(&input).await;
    let status = if envelope.success {
        StatusCode::CREATED
    } else {
        envelope.status()
    };

    Ok((status, Json(envelope)).into_response())
}

/// GET /api/v1/todos
///
/// One page of active todos, optionally filtered by status, priority, and
/// due date.
pub async fn list_todos(
    State(state): State<AppState>,
    params: Result<Query<ListTodosParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let request = params.into_request()?;

    Ok(state.todos.list(&request).await.into_response())
}

/// GET /api/v1/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;

    Ok(state.todos.get_by_id(id).await.into_response())
}

/// PATCH /api/v1/todos/{id}
///
/// Partial update of details, status, and priority. Unlike creation, an
/// empty `details` is accepted.
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;
    let Json(input) = body?;

    Ok(state.todos.update(id, &input).await.into_response())
}

/// DELETE /api/v1/todos/{id}
///
/// Soft delete: the row stays, flagged inactive.
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = id?;

    Ok(state.todos.remove(id).await.into_response())
}
