//! todo_rpc: a todo-item CRUD service over gRPC, backed by a flat JSON file.
//!
//! - [`schema`]: the `TodoItem` record and its protobuf/JSON encodings.
//! - [`store`]: whole-collection load/persist behind the `TodoStore` trait.
//! - [`service`]: Create/Get/Update/Delete/List as a `TodoHandler`.
//! - [`grpc`]: tonic transport for `todoPackage.TodoService` (feature `grpc`).
//! - [`export`]: offline JSON -> protobuf batch exporter.

pub mod config;
pub mod export;
pub mod logging;
pub mod schema;
pub mod service;
pub mod store;

#[cfg(feature = "grpc")]
pub mod client;
#[cfg(feature = "grpc")]
pub mod grpc;

pub use schema::{Empty, TodoCollection, TodoId, TodoItem, TodoList};
pub use service::{ErrorCode, TodoError, TodoHandler};
pub use store::{InMemoryTodoStore, JsonFileStore, StoreError, TodoStore};
