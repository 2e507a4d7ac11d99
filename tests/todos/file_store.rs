use std::fs;

use tempfile::TempDir;
use todo_rpc::{JsonFileStore, TodoHandler, TodoItem};

#[test]
fn state_survives_a_new_handler() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.json");

    TodoHandler::new(JsonFileStore::new(&path))
        .create(TodoItem::new("1", "A", "d", false))
        .unwrap();

    let reopened = TodoHandler::new(JsonFileStore::new(&path));
    assert_eq!(reopened.get("1").unwrap(), TodoItem::new("1", "A", "d", false));
}

#[test]
fn reads_files_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.json");
    fs::write(
        &path,
        r#"[{"id":"x","title":"from disk","description":"","completed":true},{"id":"y"}]"#,
    )
    .unwrap();

    let todos = TodoHandler::new(JsonFileStore::new(&path));

    assert_eq!(todos.get("x").unwrap().title, "from disk");
    assert_eq!(todos.get("y").unwrap(), TodoItem::new("y", "", "", false));
}

#[test]
fn corrupt_file_is_overwritten_by_next_create() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.json");
    fs::write(&path, "not json at all").unwrap();

    let todos = TodoHandler::new(JsonFileStore::new(&path));
    assert!(todos.list().is_empty());

    todos.create(TodoItem::new("1", "A", "", false)).unwrap();
    assert_eq!(todos.list().len(), 1);
}
