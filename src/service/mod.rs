//! service: Create/Get/Update/Delete/List over a whole-collection store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use todo_rpc::schema::TodoItem;
//! use todo_rpc::service::TodoHandler;
//! use todo_rpc::store::InMemoryTodoStore;
//!
//! let todos = TodoHandler::new(InMemoryTodoStore::new());
//! todos.create(TodoItem::new("1", "A", "d", false))?;
//! assert_eq!(todos.get("1")?.title, "A");
//! ```
//!
//! Storage failures are masked by the store (see `store::TodoStore::load`),
//! so the only errors a caller sees are `ALREADY_EXISTS` and `NOT_FOUND`.

mod error;
mod handler;

pub use error::{ErrorCode, TodoError};
pub use handler::TodoHandler;
