//! Todo domain model.
//!
//! # Responsibility
//! - Define the stored todo body and the listed record projection.
//! - Validate caller-supplied input shapes before any store mutation.
//!
//! # Invariants
//! - `id` is never part of the stored body; it is the map key.
//! - `content` is always a string and `done` is always a boolean once stored.
//! - Validation rejects the whole input; there is no partial acceptance.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of a stored todo.
///
/// Generated by the store on creation and immutable thereafter.
pub type TodoId = String;

/// Stored value of a todo, keyed by [`TodoId`] in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoBody {
    pub content: String,
    pub done: bool,
}

impl TodoBody {
    /// Creates a body with `done = false`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// Attaches the map key to produce a listed record.
    pub fn with_id(self, id: impl Into<TodoId>) -> TodoRecord {
        TodoRecord {
            id: id.into(),
            body: self,
        }
    }
}

/// Listed todo: the stored body merged with its id.
///
/// Serialized flat as `{"id": ..., "content": ..., "done": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    #[serde(flatten)]
    pub body: TodoBody,
}

/// Validated input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub content: String,
    /// Defaults to `false` when absent from the input.
    pub done: bool,
}

impl NewTodo {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// Checks an untyped input object.
    ///
    /// `content` must be a string; `done`, when present, must be a boolean.
    /// A present `null` is a type error, not an absent field. Other fields
    /// are ignored.
    ///
    /// # Errors
    /// - `NotAnObject` when `value` is not a JSON object.
    /// - `MissingContent` / `InvalidContent` for a bad `content` field.
    /// - `InvalidDone` for a non-boolean `done`.
    pub fn from_value(value: &Value) -> Result<Self, TodoValidationError> {
        let object = as_object(value)?;

        let content = match object.get("content") {
            None => return Err(TodoValidationError::MissingContent),
            Some(Value::String(content)) => content.clone(),
            Some(other) => {
                return Err(TodoValidationError::InvalidContent {
                    found: json_type_name(other),
                })
            }
        };
        let done = optional_bool(object, "done")?.unwrap_or(false);

        Ok(Self { content, done })
    }

    pub(crate) fn into_body(self) -> TodoBody {
        TodoBody {
            content: self.content,
            done: self.done,
        }
    }
}

/// Validated input for a partial update.
///
/// Only fields that are `Some` overwrite the stored body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    pub id: TodoId,
    pub content: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn new(id: impl Into<TodoId>) -> Self {
        Self {
            id: id.into(),
            content: None,
            done: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    /// Checks an untyped update object.
    ///
    /// # Errors
    /// - `NotAnObject` when `value` is not a JSON object.
    /// - `MissingId` / `InvalidId` for a bad `id` field.
    /// - `InvalidContent` / `InvalidDone` for supplied fields of the wrong type.
    pub fn from_value(value: &Value) -> Result<Self, TodoValidationError> {
        let object = as_object(value)?;

        let id = match object.get("id") {
            None => return Err(TodoValidationError::MissingId),
            Some(Value::String(id)) => id.clone(),
            Some(other) => {
                return Err(TodoValidationError::InvalidId {
                    found: json_type_name(other),
                })
            }
        };
        let content = match object.get("content") {
            None => None,
            Some(Value::String(content)) => Some(content.clone()),
            Some(other) => {
                return Err(TodoValidationError::InvalidContent {
                    found: json_type_name(other),
                })
            }
        };
        let done = optional_bool(object, "done")?;

        Ok(Self { id, content, done })
    }

    /// Merges supplied fields into `body`, leaving absent fields untouched.
    pub fn apply(&self, body: &mut TodoBody) {
        if let Some(content) = &self.content {
            body.content.clone_from(content);
        }
        if let Some(done) = self.done {
            body.done = done;
        }
    }
}

/// Checks a scalar id argument, as taken by `get` and `del`.
///
/// JSON `null` stands in for a missing argument.
pub fn parse_todo_id(value: &Value) -> Result<&str, TodoValidationError> {
    match value {
        Value::String(id) => Ok(id.as_str()),
        Value::Null => Err(TodoValidationError::MissingId),
        other => Err(TodoValidationError::InvalidId {
            found: json_type_name(other),
        }),
    }
}

/// Reason an input failed its shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    NotAnObject { found: &'static str },
    MissingContent,
    InvalidContent { found: &'static str },
    InvalidDone { found: &'static str },
    MissingId,
    InvalidId { found: &'static str },
}

impl TodoValidationError {
    /// Stable snake_case code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "not_an_object",
            Self::MissingContent => "missing_content",
            Self::InvalidContent { .. } => "invalid_content",
            Self::InvalidDone { .. } => "invalid_done",
            Self::MissingId => "missing_id",
            Self::InvalidId { .. } => "invalid_id",
        }
    }
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject { found } => write!(f, "expected an object, got {found}"),
            Self::MissingContent => write!(f, "`content` is required"),
            Self::InvalidContent { found } => {
                write!(f, "`content` must be a string, got {found}")
            }
            Self::InvalidDone { found } => write!(f, "`done` must be a boolean, got {found}"),
            Self::MissingId => write!(f, "`id` is required"),
            Self::InvalidId { found } => write!(f, "`id` must be a string, got {found}"),
        }
    }
}

impl Error for TodoValidationError {}

fn as_object(value: &Value) -> Result<&Map<String, Value>, TodoValidationError> {
    value
        .as_object()
        .ok_or_else(|| TodoValidationError::NotAnObject {
            found: json_type_name(value),
        })
}

fn optional_bool(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Option<bool>, TodoValidationError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(TodoValidationError::InvalidDone {
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_todo_id, NewTodo, TodoBody, TodoPatch, TodoValidationError};
    use serde_json::json;

    #[test]
    fn new_todo_defaults_done_to_false() {
        let todo = NewTodo::from_value(&json!({ "content": "test" })).unwrap();
        assert_eq!(todo, NewTodo::new("test"));
    }

    #[test]
    fn new_todo_rejects_null_fields() {
        let err = NewTodo::from_value(&json!({ "content": "x", "done": null })).unwrap_err();
        assert_eq!(err, TodoValidationError::InvalidDone { found: "null" });

        let err = NewTodo::from_value(&json!({ "content": null })).unwrap_err();
        assert_eq!(err, TodoValidationError::InvalidContent { found: "null" });
    }

    #[test]
    fn patch_rejects_null_fields() {
        let err = TodoPatch::from_value(&json!({ "id": null })).unwrap_err();
        assert_eq!(err, TodoValidationError::InvalidId { found: "null" });

        let err = TodoPatch::from_value(&json!({ "id": "a", "content": null })).unwrap_err();
        assert_eq!(err, TodoValidationError::InvalidContent { found: "null" });
    }

    #[test]
    fn new_todo_rejects_non_object_input() {
        let err = NewTodo::from_value(&json!("content")).unwrap_err();
        assert_eq!(err, TodoValidationError::NotAnObject { found: "string" });
    }

    #[test]
    fn patch_rejects_wrong_done_type() {
        let err = TodoPatch::from_value(&json!({ "id": "a", "done": "yes" })).unwrap_err();
        assert_eq!(err, TodoValidationError::InvalidDone { found: "string" });
        assert_eq!(err.code(), "invalid_done");
    }

    #[test]
    fn patch_apply_only_touches_supplied_fields() {
        let mut body = TodoBody::new("before");
        TodoPatch::new("a").done(true).apply(&mut body);
        assert_eq!(body.content, "before");
        assert!(body.done);
    }

    #[test]
    fn parse_todo_id_distinguishes_null_from_wrong_type() {
        assert_eq!(parse_todo_id(&json!("a")), Ok("a"));
        assert_eq!(
            parse_todo_id(&json!(null)),
            Err(TodoValidationError::MissingId)
        );
        assert_eq!(
            parse_todo_id(&json!(1)),
            Err(TodoValidationError::InvalidId { found: "number" })
        );
    }
}
