//! Store - whole-collection persistence for todo items.
//!
//! A store loads the entire collection and replaces the entire collection.
//! There is no per-item access and no locking across a load/persist pair:
//! two callers interleaving load -> mutate -> persist will lose one update.
//!
//! Backends implement the fallible `try_load` / `try_persist`. Callers on the
//! request path use the provided `load` / `persist`, which apply the lenient
//! policy: an unreadable store is an empty store, and a failed write is
//! logged and dropped.
//!
//! ## Example
//!
//! ```ignore
//! use todo_rpc::store::{JsonFileStore, TodoStore};
//!
//! let store = JsonFileStore::new("todos.json");
//! let mut todos = store.load();
//! todos.push(item);
//! store.persist(&todos);
//! ```

mod error;
mod in_memory;
mod json_file;

pub use error::StoreError;
pub use in_memory::InMemoryTodoStore;
pub use json_file::JsonFileStore;

use crate::schema::{TodoCollection, TodoItem};

/// Load/replace storage for the full todo collection.
pub trait TodoStore: Send + Sync {
    /// Read the full collection. An absent backing store is `Ok(vec![])`.
    fn try_load(&self) -> Result<TodoCollection, StoreError>;

    /// Replace the full collection. Readers never observe a partial write.
    fn try_persist(&self, todos: &[TodoItem]) -> Result<(), StoreError>;

    /// Read the full collection, masking any failure as an empty collection.
    fn load(&self) -> TodoCollection {
        match self.try_load() {
            Ok(todos) => todos,
            Err(e) => {
                tracing::warn!(error = %e, "todo store unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the full collection, logging and dropping any failure.
    fn persist(&self, todos: &[TodoItem]) {
        if let Err(e) = self.try_persist(todos) {
            tracing::error!(error = %e, count = todos.len(), "failed to persist todos");
        }
    }
}

impl<S: TodoStore + ?Sized> TodoStore for std::sync::Arc<S> {
    fn try_load(&self) -> Result<TodoCollection, StoreError> {
        (**self).try_load()
    }

    fn try_persist(&self, todos: &[TodoItem]) -> Result<(), StoreError> {
        (**self).try_persist(todos)
    }
}
