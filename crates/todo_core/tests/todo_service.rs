use serde_json::json;
use todo_core::{RepoError, SequentialIdGenerator, TodoBody, TodoService, TodosDb};

#[test]
fn service_owns_store_across_calls() {
    let mut service = TodoService::with_parts(TodosDb::new(), SequentialIdGenerator::new());

    let first = service.add(&json!({ "content": "buy milk" })).unwrap();
    let second = service.add(&json!({ "content": "call mum", "done": true })).unwrap();
    assert_eq!((first.as_str(), second.as_str()), ("todo-1", "todo-2"));

    assert!(service.set(&json!({ "id": "todo-1", "done": true })).unwrap());
    assert!(service.del(&json!("todo-2")).unwrap());

    assert_eq!(
        service.row(),
        vec![TodoBody {
            content: "buy milk".to_string(),
            done: true,
        }
        .with_id("todo-1")]
    );
    assert_eq!(service.db().len(), 1);
}

#[test]
fn service_keeps_generator_state_between_calls() {
    let mut service = TodoService::with_parts(TodosDb::new(), SequentialIdGenerator::new());

    service.add(&json!({ "content": "a" })).unwrap();
    assert!(service.del(&json!("todo-1")).unwrap());
    let id = service.add(&json!({ "content": "b" })).unwrap();

    assert_eq!(id, "todo-2");
}

#[test]
fn service_surfaces_repository_errors_unchanged() {
    let mut service = TodoService::new();

    assert!(matches!(
        service.get(&json!(42)),
        Err(RepoError::InvalidArgument(_))
    ));
    assert!(matches!(
        service.add(&json!({ "content": 1 })),
        Err(RepoError::Validation(_))
    ));
    assert!(service.into_db().is_empty());
}

#[test]
fn service_wraps_a_prepared_store() {
    let db: TodosDb = [("someId".to_string(), TodoBody::new("testval"))]
        .into_iter()
        .collect();
    let mut service = TodoService::with_parts(db, SequentialIdGenerator::new());

    assert_eq!(
        service.get(&json!("someId")).unwrap(),
        Some(TodoBody::new("testval"))
    );
    assert!(!service.set(&json!({ "id": "missing", "content": "x" })).unwrap());
}
