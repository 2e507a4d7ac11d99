//! TodoHandler: the five todo operations over a `TodoStore`.
//!
//! Each call is one load -> linear scan / mutate -> (maybe) persist cycle.
//! The handler holds no state of its own; the store is the only source of
//! truth and is reloaded on every call.

use super::error::TodoError;
use crate::schema::{TodoCollection, TodoItem};
use crate::store::TodoStore;

/// Request handler for todo CRUD, generic over the backing store.
pub struct TodoHandler<S> {
    store: S,
}

impl<S: TodoStore> TodoHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append `item` unless its id is already taken. Returns `item` unchanged.
    pub fn create(&self, item: TodoItem) -> Result<TodoItem, TodoError> {
        let mut todos = self.store.load();
        if todos.iter().any(|t| t.id == item.id) {
            tracing::info!(id = %item.id, "create rejected, id already exists");
            return Err(TodoError::AlreadyExists(item.id));
        }

        todos.push(item.clone());
        self.store.persist(&todos);
        tracing::info!(id = %item.id, title = %item.title, "created todo");
        Ok(item)
    }

    /// First item whose id matches.
    pub fn get(&self, id: &str) -> Result<TodoItem, TodoError> {
        let todos = self.store.load();
        match todos.into_iter().find(|t| t.id == id) {
            Some(todo) => {
                tracing::info!(id, "found todo");
                Ok(todo)
            }
            None => {
                tracing::info!(id, "todo not found");
                Err(TodoError::NotFound(id.to_string()))
            }
        }
    }

    /// Replace the first item with a matching id wholesale. Nothing is merged:
    /// fields the caller left at their zero value overwrite the stored ones.
    pub fn update(&self, item: TodoItem) -> Result<TodoItem, TodoError> {
        let mut todos = self.store.load();
        let Some(idx) = todos.iter().position(|t| t.id == item.id) else {
            tracing::info!(id = %item.id, "update target not found");
            return Err(TodoError::NotFound(item.id));
        };

        todos[idx] = item.clone();
        self.store.persist(&todos);
        tracing::info!(id = %item.id, "updated todo");
        Ok(item)
    }

    /// Remove every item with a matching id.
    pub fn delete(&self, id: &str) -> Result<(), TodoError> {
        let mut todos = self.store.load();
        let before = todos.len();
        todos.retain(|t| t.id != id);

        if todos.len() == before {
            tracing::info!(id, "delete target not found");
            return Err(TodoError::NotFound(id.to_string()));
        }

        self.store.persist(&todos);
        tracing::info!(id, removed = before - todos.len(), "deleted todo(s)");
        Ok(())
    }

    /// The full collection, verbatim.
    pub fn list(&self) -> TodoCollection {
        let todos = self.store.load();
        tracing::info!(count = todos.len(), "listed todos");
        todos
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
