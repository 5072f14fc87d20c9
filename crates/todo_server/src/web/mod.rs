//! HTTP routes.
//!
//! # Responsibility
//! - Serve the static index page and stylesheet.
//! - Map JSON API calls onto the shared `TodoService`.

mod error;
mod index;
mod todos;

use axum::Router;
use todo_core::IdGenerator;

pub use error::ApiError;
pub use todos::SharedService;

/// Builds the full router over `service`.
pub fn routes<G>(service: SharedService<G>) -> Router
where
    G: IdGenerator + Send + 'static,
{
    Router::new()
        .merge(index::routes())
        .merge(todos::routes(service))
}
