//! JSON API over the todo store.
//!
//! # Invariants
//! - Every handler takes the single store lock for exactly one operation.
//! - The lock is never held across an `.await`.

use super::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, MutexGuard};
use todo_core::{IdGenerator, TodoBody, TodoRecord, TodoService, UuidIdGenerator};

/// Store shared by all handlers behind one lock.
pub type SharedService<G = UuidIdGenerator> = Arc<Mutex<TodoService<G>>>;

pub(super) fn routes<G>(service: SharedService<G>) -> Router
where
    G: IdGenerator + Send + 'static,
{
    Router::new()
        .route("/api/todos", get(list_todos::<G>).post(add_todo::<G>))
        .route(
            "/api/todos/:id",
            get(get_todo::<G>)
                .patch(set_todo::<G>)
                .delete(del_todo::<G>),
        )
        .with_state(service)
}

fn lock<G>(service: &SharedService<G>) -> Result<MutexGuard<'_, TodoService<G>>, ApiError> {
    service.lock().map_err(|_| ApiError::StorePoisoned)
}

async fn list_todos<G: IdGenerator + Send + 'static>(
    State(service): State<SharedService<G>>,
) -> Result<Json<Vec<TodoRecord>>, ApiError> {
    let todos = lock(&service)?.row();
    Ok(Json(todos))
}

async fn add_todo<G: IdGenerator + Send + 'static>(
    State(service): State<SharedService<G>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(todo) = body?;
    let id = lock(&service)?.add(&todo)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn get_todo<G: IdGenerator + Send + 'static>(
    Path(id): Path<String>,
    State(service): State<SharedService<G>>,
) -> Result<Json<TodoBody>, ApiError> {
    let body = lock(&service)?.get(&Value::from(id.as_str()))?;
    body.map(Json).ok_or(ApiError::NotFound(id))
}

async fn del_todo<G: IdGenerator + Send + 'static>(
    Path(id): Path<String>,
    State(service): State<SharedService<G>>,
) -> Result<Json<Value>, ApiError> {
    let deleted = lock(&service)?.del(&Value::String(id))?;
    Ok(Json(json!({ "deleted": deleted })))
}

/// The path id wins over any `id` in the body.
async fn set_todo<G: IdGenerator + Send + 'static>(
    Path(id): Path<String>,
    State(service): State<SharedService<G>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(mut patch) = body?;
    if let Value::Object(fields) = &mut patch {
        fields.insert("id".to_string(), Value::String(id));
    }
    let updated = lock(&service)?.set(&patch)?;
    Ok(Json(json!({ "updated": updated })))
}
