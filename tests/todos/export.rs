use std::fs;

use serde_json::json;
use tempfile::TempDir;
use todo_rpc::export::{self, ExportError};
use todo_rpc::{JsonFileStore, TodoHandler, TodoItem};

#[test]
fn round_trip_preserves_every_item() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todos.json");
    let output = dir.path().join("todos.bin");

    let todos: Vec<TodoItem> = (0..5)
        .map(|i| TodoItem::new(i.to_string(), format!("title {i}"), "ü ✓", i % 2 == 0))
        .collect();
    fs::write(&input, serde_json::to_vec(&todos).unwrap()).unwrap();

    let count = export::export_file(&input, &output).unwrap();

    assert_eq!(count, 5);
    assert_eq!(export::read_exported(&output).unwrap(), todos);
}

#[test]
fn exports_the_service_store_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todos.json");
    let output = dir.path().join("todos.bin");

    let handler = TodoHandler::new(JsonFileStore::new(&input));
    handler.create(TodoItem::new("1", "A", "d", false)).unwrap();
    handler.create(TodoItem::new("2", "B", "", true)).unwrap();

    export::export_file(&input, &output).unwrap();

    assert_eq!(export::read_exported(&output).unwrap(), handler.list());
}

#[test]
fn invalid_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todos.json");
    let output = dir.path().join("todos.bin");
    fs::write(&input, json!([{ "id": "1", "completed": "yes" }]).to_string()).unwrap();

    let err = export::export_file(&input, &output).unwrap_err();

    assert_eq!(
        err,
        ExportError::Invalid("todos.0.completed: boolean expected".into())
    );
    assert!(!output.exists());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = export::export_file(&dir.path().join("absent.json"), &dir.path().join("out.bin"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Read(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todos.json");
    fs::write(&input, "[{").unwrap();

    let err = export::export_file(&input, &dir.path().join("out.bin")).unwrap_err();
    assert!(matches!(err, ExportError::Parse(_)));
}

#[test]
fn unwritable_output_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todos.json");
    fs::write(&input, "[]").unwrap();

    let err = export::export_file(&input, &dir.path().join("no-such-dir").join("out.bin"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Write(_)));
}
