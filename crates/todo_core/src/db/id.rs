//! Identifier generation for new todos.

use crate::model::todo::TodoId;
use uuid::Uuid;

/// Source of candidate ids for newly created todos.
///
/// Implementations need not guarantee uniqueness; the repository re-draws
/// when a candidate is empty or already taken.
pub trait IdGenerator {
    fn next_id(&mut self) -> TodoId;
}

/// Random v4 UUID ids. The default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TodoId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `todo-1`, `todo-2`, ... ids.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TodoId {
        self.next += 1;
        format!("todo-{}", self.next)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> TodoId {
        (**self).next_id()
    }
}
