//! Core use-case services.
//!
//! # Responsibility
//! - Give long-lived callers (the HTTP layer) an owned store instance.
//! - Keep callers decoupled from the repository borrow lifetime.

pub mod todo_service;
