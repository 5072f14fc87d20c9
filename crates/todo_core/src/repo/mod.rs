//! Repository layer over the in-memory todo store.
//!
//! # Responsibility
//! - Define the CRUD contract consumed by services and the HTTP layer.
//! - Keep input validation and store mutation in one place.
//!
//! # Invariants
//! - Repository writes validate their input before touching `TodosDb`.
//! - Absence is reported as a value (`None`/`false`), not as an error.

pub mod todo_repo;
