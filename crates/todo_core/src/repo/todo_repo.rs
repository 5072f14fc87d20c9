//! Todo repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the five store operations (`row`, `get`, `del`, `add`, `set`)
//!   over an injected `TodosDb`.
//! - Validate untyped input up front and mutate only after validation.
//!
//! # Invariants
//! - A failed operation leaves the store unchanged.
//! - "Not found" is a normal result (`None`/`false`), never an error.
//! - `set` never creates a todo for an unknown id.

use crate::db::{IdGenerator, TodosDb, UuidIdGenerator};
use crate::model::todo::{
    parse_todo_id, NewTodo, TodoBody, TodoId, TodoPatch, TodoRecord, TodoValidationError,
};
use log::{debug, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound on generator draws for one `add`.
pub const MAX_ID_ATTEMPTS: usize = 16;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A scalar argument (`id` for `get`/`del`) has the wrong type.
    InvalidArgument(TodoValidationError),
    /// An input object (`add`/`set`) failed its shape check.
    Validation(TodoValidationError),
    /// The id generator kept producing empty or taken ids.
    IdExhausted { attempts: usize },
}

impl RepoError {
    /// Stable snake_case kind, used by log events and API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Validation(_) => "validation",
            Self::IdExhausted { .. } => "id_exhausted",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::Validation(err) => write!(f, "invalid todo: {err}"),
            Self::IdExhausted { attempts } => {
                write!(f, "no free todo id after {attempts} attempts")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::IdExhausted { .. } => None,
        }
    }
}

/// Repository interface for todo CRUD operations.
///
/// Inputs are untyped JSON values so that shape errors are reported by the
/// repository itself rather than by each caller.
pub trait TodoRepository {
    /// Lists every todo with its id, in insertion order.
    fn row(&self) -> Vec<TodoRecord>;
    /// Returns the stored body for `id`, or `None` when absent.
    fn get(&self, id: &Value) -> RepoResult<Option<TodoBody>>;
    /// Removes `id`; returns whether an entry existed.
    fn del(&mut self, id: &Value) -> RepoResult<bool>;
    /// Stores a new todo and returns its generated id.
    fn add(&mut self, todo: &Value) -> RepoResult<TodoId>;
    /// Partially updates an existing todo; returns whether it existed.
    fn set(&mut self, patch: &Value) -> RepoResult<bool>;
}

/// Repository bound to a caller-owned `TodosDb`.
pub struct InMemoryTodoRepository<'db, G = UuidIdGenerator> {
    db: &'db mut TodosDb,
    ids: G,
}

impl<'db> InMemoryTodoRepository<'db, UuidIdGenerator> {
    pub fn new(db: &'db mut TodosDb) -> Self {
        Self::with_id_generator(db, UuidIdGenerator)
    }
}

impl<'db, G: IdGenerator> InMemoryTodoRepository<'db, G> {
    pub fn with_id_generator(db: &'db mut TodosDb, ids: G) -> Self {
        Self { db, ids }
    }

    /// Typed lookup.
    pub fn find(&self, id: &str) -> Option<&TodoBody> {
        self.db.get(id)
    }

    /// Typed removal; returns whether an entry existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.db.remove(id).is_some();
        info!(
            "event=todo_del module=repo status=ok removed={} remaining={}",
            removed,
            self.db.len()
        );
        removed
    }

    /// Typed insert under a freshly generated id.
    ///
    /// # Errors
    /// - `IdExhausted` when no usable id was drawn within `MAX_ID_ATTEMPTS`.
    pub fn insert(&mut self, todo: NewTodo) -> RepoResult<TodoId> {
        let id = self.fresh_id()?;
        self.db.insert(id.clone(), todo.into_body());
        info!(
            "event=todo_add module=repo status=ok id={} total={}",
            id,
            self.db.len()
        );
        Ok(id)
    }

    /// Typed partial update; returns whether the todo existed.
    pub fn update(&mut self, patch: &TodoPatch) -> bool {
        let Some(body) = self.db.get_mut(&patch.id) else {
            debug!(
                "event=todo_set module=repo status=not_found id={}",
                patch.id
            );
            return false;
        };

        patch.apply(body);
        info!(
            "event=todo_set module=repo status=ok id={} content_changed={} done_changed={}",
            patch.id,
            patch.content.is_some(),
            patch.done.is_some()
        );
        true
    }

    fn fresh_id(&mut self) -> RepoResult<TodoId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if !candidate.is_empty() && !self.db.contains_key(&candidate) {
                return Ok(candidate);
            }
        }

        warn!(
            "event=todo_add module=repo status=error error_code=id_exhausted attempts={}",
            MAX_ID_ATTEMPTS
        );
        Err(RepoError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl<G: IdGenerator> TodoRepository for InMemoryTodoRepository<'_, G> {
    fn row(&self) -> Vec<TodoRecord> {
        self.db
            .iter()
            .map(|(id, body)| body.clone().with_id(id.clone()))
            .collect()
    }

    fn get(&self, id: &Value) -> RepoResult<Option<TodoBody>> {
        let id = parse_todo_id(id)
            .map_err(|err| rejected("todo_get", RepoError::InvalidArgument(err)))?;
        Ok(self.find(id).cloned())
    }

    fn del(&mut self, id: &Value) -> RepoResult<bool> {
        let id = parse_todo_id(id)
            .map_err(|err| rejected("todo_del", RepoError::InvalidArgument(err)))?;
        Ok(self.remove(id))
    }

    fn add(&mut self, todo: &Value) -> RepoResult<TodoId> {
        let todo = NewTodo::from_value(todo)
            .map_err(|err| rejected("todo_add", RepoError::Validation(err)))?;
        self.insert(todo)
    }

    fn set(&mut self, patch: &Value) -> RepoResult<bool> {
        let patch = TodoPatch::from_value(patch)
            .map_err(|err| rejected("todo_set", RepoError::Validation(err)))?;
        Ok(self.update(&patch))
    }
}

fn rejected(event: &str, err: RepoError) -> RepoError {
    let reason = match &err {
        RepoError::InvalidArgument(inner) | RepoError::Validation(inner) => inner.code(),
        RepoError::IdExhausted { .. } => "id_exhausted",
    };
    warn!(
        "event={} module=repo status=rejected error_code={} reason={}",
        event,
        err.kind(),
        reason
    );
    err
}
