use tempfile::TempDir;
use todo_rpc::{ErrorCode, JsonFileStore, TodoHandler, TodoItem, TodoStore};

fn walk<S: TodoStore>(todos: &TodoHandler<S>) {
    let created = todos.create(TodoItem::new("1", "A", "d", false)).unwrap();
    assert_eq!(created, TodoItem::new("1", "A", "d", false));
    assert_eq!(todos.list(), vec![TodoItem::new("1", "A", "d", false)]);

    todos.update(TodoItem::new("1", "B", "d2", true)).unwrap();
    assert_eq!(todos.get("1").unwrap(), TodoItem::new("1", "B", "d2", true));

    todos.delete("1").unwrap();
    assert_eq!(todos.get("1").unwrap_err().code(), ErrorCode::NotFound);
    assert!(todos.list().is_empty());
}

#[test]
fn lifecycle_in_memory() {
    walk(&crate::support::in_memory());
}

#[test]
fn lifecycle_on_disk() {
    let dir = TempDir::new().unwrap();
    let todos = TodoHandler::new(JsonFileStore::new(dir.path().join("todos.json")));
    walk(&todos);

    let text = std::fs::read_to_string(dir.path().join("todos.json")).unwrap();
    assert_eq!(text.trim(), "[]");
}
