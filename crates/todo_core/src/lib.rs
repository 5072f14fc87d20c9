//! Core domain logic for the todo backend.
//! This crate is the single source of truth for todo store invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{IdGenerator, SequentialIdGenerator, TodosDb, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{
    parse_todo_id, NewTodo, TodoBody, TodoId, TodoPatch, TodoRecord, TodoValidationError,
};
pub use repo::todo_repo::{
    InMemoryTodoRepository, RepoError, RepoResult, TodoRepository, MAX_ID_ATTEMPTS,
};
pub use service::todo_service::TodoService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
