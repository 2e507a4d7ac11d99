//! Schema: the todo record and the messages built around it.
//!
//! Every type here is a prost message (standard protobuf wire format, no
//! `.proto` file) and, where it is persisted, a serde type for the JSON
//! store file. The same definitions back the RPC surface and the batch
//! exporter's binary encoding.
//!
//! ```text
//! message TodoItem { string id = 1; string title = 2; string description = 3; bool completed = 4; }
//! message TodoId   { string id = 1; }
//! message TodoList { repeated TodoItem todos = 1; }
//! message Empty    {}
//! ```

use serde::{Deserialize, Serialize};

/// A single todo item. `id` is caller-supplied and is the only lookup key.
///
/// Missing JSON fields decode to their zero value, same as an omitted
/// protobuf field.
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoItem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(bool, tag = "4")]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            completed,
        }
    }
}

/// Request carrying only an item id (Get / Delete).
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct TodoId {
    #[prost(string, tag = "1")]
    pub id: String,
}

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The whole collection, in insertion order.
///
/// Used as the `ListTodos` response and as the batch exporter's top-level
/// binary message.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct TodoList {
    #[prost(message, repeated, tag = "1")]
    pub todos: Vec<TodoItem>,
}

/// Empty message, wire-identical to `google.protobuf.Empty`.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct Empty {}

/// The unit of persistence.
pub type TodoCollection = Vec<TodoItem>;
