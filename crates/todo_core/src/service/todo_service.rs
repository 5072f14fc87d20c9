//! Todo use-case service.
//!
//! # Responsibility
//! - Own one `TodosDb` and its id generator for long-lived callers.
//! - Expose the repository operations without exposing the borrow.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Every call binds a fresh repository to the owned store, so no state
//!   lives outside `TodosDb`.

use crate::db::{IdGenerator, TodosDb, UuidIdGenerator};
use crate::model::todo::{TodoBody, TodoId, TodoRecord};
use crate::repo::todo_repo::{InMemoryTodoRepository, RepoResult, TodoRepository};
use serde_json::Value;

/// Owning wrapper around a todo store.
#[derive(Debug, Default)]
pub struct TodoService<G = UuidIdGenerator> {
    db: TodosDb,
    ids: G,
}

impl TodoService<UuidIdGenerator> {
    /// Creates a service over an empty store with uuid ids.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: IdGenerator> TodoService<G> {
    /// Creates a service over an existing store and generator.
    pub fn with_parts(db: TodosDb, ids: G) -> Self {
        Self { db, ids }
    }

    /// Read-only view of the owned store.
    pub fn db(&self) -> &TodosDb {
        &self.db
    }

    /// Releases the owned store.
    pub fn into_db(self) -> TodosDb {
        self.db
    }

    pub fn row(&mut self) -> Vec<TodoRecord> {
        self.repo().row()
    }

    pub fn get(&mut self, id: &Value) -> RepoResult<Option<TodoBody>> {
        self.repo().get(id)
    }

    pub fn del(&mut self, id: &Value) -> RepoResult<bool> {
        self.repo().del(id)
    }

    pub fn add(&mut self, todo: &Value) -> RepoResult<TodoId> {
        self.repo().add(todo)
    }

    pub fn set(&mut self, patch: &Value) -> RepoResult<bool> {
        self.repo().set(patch)
    }

    fn repo(&mut self) -> InMemoryTodoRepository<'_, &mut G> {
        InMemoryTodoRepository::with_id_generator(&mut self.db, &mut self.ids)
    }
}
