//! Shared fixtures: seeded handlers and a store that stalls between load
//! and persist so two writers can be forced to overlap.

use std::sync::{Arc, Barrier};

use todo_rpc::{InMemoryTodoStore, StoreError, TodoCollection, TodoHandler, TodoItem, TodoStore};

pub fn item(id: &str, title: &str) -> TodoItem {
    TodoItem::new(id, title, format!("{} description", title), false)
}

pub fn in_memory() -> TodoHandler<InMemoryTodoStore> {
    TodoHandler::new(InMemoryTodoStore::new())
}

pub fn seeded(todos: Vec<TodoItem>) -> TodoHandler<InMemoryTodoStore> {
    TodoHandler::new(InMemoryTodoStore::with_todos(todos))
}

/// Wraps a store; every `try_load` waits on a shared barrier after reading,
/// so N concurrent callers all hold the same snapshot before any persists.
pub struct BarrierStore<S> {
    inner: S,
    barrier: Arc<Barrier>,
}

impl<S> BarrierStore<S> {
    pub fn new(inner: S, parties: usize) -> Self {
        Self {
            inner,
            barrier: Arc::new(Barrier::new(parties)),
        }
    }
}

impl<S: TodoStore> TodoStore for BarrierStore<S> {
    fn try_load(&self) -> Result<TodoCollection, StoreError> {
        let todos = self.inner.try_load()?;
        self.barrier.wait();
        Ok(todos)
    }

    fn try_persist(&self, todos: &[TodoItem]) -> Result<(), StoreError> {
        self.inner.try_persist(todos)
    }
}

/// A store whose backing medium is always broken.
pub struct BrokenStore;

impl TodoStore for BrokenStore {
    fn try_load(&self) -> Result<TodoCollection, StoreError> {
        Err(StoreError::Read("disk on fire".into()))
    }

    fn try_persist(&self, _todos: &[TodoItem]) -> Result<(), StoreError> {
        Err(StoreError::Write("disk on fire".into()))
    }
}
