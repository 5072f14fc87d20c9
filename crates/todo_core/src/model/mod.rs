//! Todo domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and its callers.
//! - Own input shape validation so store operations stay mutation-only.
//!
//! # Invariants
//! - Every stored todo is identified by a store-generated `TodoId`.

pub mod todo;
