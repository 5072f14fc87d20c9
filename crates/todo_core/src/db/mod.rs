//! In-memory backing store for todos.
//!
//! # Responsibility
//! - Hold the `id -> body` mapping that the model mutates in place.
//! - Provide identifier generators for newly created todos.
//!
//! # Invariants
//! - Iteration follows insertion order.
//! - Removing a key keeps the relative order of the remaining keys.
//! - The store is owned by its caller; the model only borrows it.

use crate::model::todo::{TodoBody, TodoId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod id;

pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};

/// Insertion-ordered `id -> body` mapping.
///
/// Construct one per logical store (or per test) and lend it to the
/// repository with `&mut`. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodosDb {
    entries: IndexMap<TodoId, TodoBody>,
}

impl TodosDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TodoBody> {
        self.entries.get(id)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &TodoId> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TodoId, &TodoBody)> {
        self.entries.iter()
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut TodoBody> {
        self.entries.get_mut(id)
    }

    pub(crate) fn insert(&mut self, id: TodoId, body: TodoBody) {
        self.entries.insert(id, body);
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<TodoBody> {
        self.entries.shift_remove(id)
    }
}

impl FromIterator<(TodoId, TodoBody)> for TodosDb {
    fn from_iter<I: IntoIterator<Item = (TodoId, TodoBody)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
