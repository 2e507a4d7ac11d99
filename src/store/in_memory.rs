//! InMemoryTodoStore - Vec-backed store for testing and development.

use std::sync::{Arc, RwLock};

use super::{StoreError, TodoStore};
use crate::schema::{TodoCollection, TodoItem};

/// In-memory todo store. Clone-friendly via Arc; clones share the collection.
#[derive(Clone, Default)]
pub struct InMemoryTodoStore {
    todos: Arc<RwLock<TodoCollection>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `todos`.
    pub fn with_todos(todos: TodoCollection) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }
}

impl TodoStore for InMemoryTodoStore {
    fn try_load(&self) -> Result<TodoCollection, StoreError> {
        let todos = self
            .todos
            .read()
            .map_err(|_| StoreError::LockPoisoned("load"))?;
        Ok(todos.clone())
    }

    fn try_persist(&self, todos: &[TodoItem]) -> Result<(), StoreError> {
        let mut stored = self
            .todos
            .write()
            .map_err(|_| StoreError::LockPoisoned("persist"))?;
        *stored = todos.to_vec();
        Ok(())
    }
}
