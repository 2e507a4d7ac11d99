//! Drives the interactive menu client against a live server.

use std::sync::Arc;

use todo_rpc::client::run_with;
use todo_rpc::{InMemoryTodoStore, TodoHandler, TodoItem, TodoStore};

use crate::transport_grpc::start_server;

async fn drive(store: InMemoryTodoStore, script: &str) -> String {
    let mut client = start_server(Arc::new(TodoHandler::new(store))).await;
    let mut output = Vec::new();
    run_with(&mut client, script.as_bytes(), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn create_then_get_through_menu() {
    let store = InMemoryTodoStore::new();
    let out = drive(store.clone(), "1\n7\nwalk\ndog\nTrue\n3\n7\n6\n").await;

    assert!(out.contains("Todo created:"));
    assert!(out.contains("Fetched Todo:"));
    assert_eq!(store.load(), vec![TodoItem::new("7", "walk", "dog", true)]);
}

#[tokio::test]
async fn each_result_prints_before_next_menu() {
    let out = drive(InMemoryTodoStore::new(), "3\nmissing\n6\n").await;

    let error_at = out.find("Error getting todo: Todo not found").unwrap();
    let last_menu = out.rfind("Todo gRPC Client Menu:").unwrap();
    assert!(error_at < last_menu);
}

#[tokio::test]
async fn update_and_delete_through_menu() {
    let store = InMemoryTodoStore::with_todos(vec![TodoItem::new("1", "A", "d", false)]);
    let out = drive(store.clone(), "4\n1\nB\nd2\nfalse\n5\n1\n2\n").await;

    assert!(out.contains("Updated Todo:"));
    assert!(out.contains("Todo deleted."));
    assert!(out.contains("Todos: []"));
    assert!(store.load().is_empty());
}

#[tokio::test]
async fn invalid_choice_and_eof_exit_cleanly() {
    let out = drive(InMemoryTodoStore::new(), "9\n").await;
    assert!(out.contains("Invalid choice. Please select 1-6."));
}
