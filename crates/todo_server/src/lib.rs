//! HTTP front end for the todo store.
//!
//! # Responsibility
//! - Own the process-wide `TodoService` behind a single lock.
//! - Translate HTTP requests into store operations and JSON responses.

pub mod config;
pub mod web;

use axum::Router;
use std::sync::{Arc, Mutex};
use todo_core::{IdGenerator, TodoService};

pub use config::{ConfigError, ServerConfig};
pub use web::{ApiError, SharedService};

/// Builds the application router over a fresh, empty store.
pub fn app() -> Router {
    app_with_service(Arc::new(Mutex::new(TodoService::new())))
}

/// Builds the application router over a caller-provided store.
pub fn app_with_service<G>(service: SharedService<G>) -> Router
where
    G: IdGenerator + Send + 'static,
{
    web::routes(service)
}
