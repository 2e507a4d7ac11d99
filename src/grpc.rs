//! gRPC transport: maps `todoPackage.TodoService` RPCs onto a `TodoHandler`.
//!
//! Requires the `grpc` feature. Uses tonic for the server and client and
//! prost for message serialization (standard protobuf wire format, no
//! `.proto` file; the messages live in `crate::schema`).
//!
//! ## RPCs
//!
//! - `CreateTodo(TodoItem) -> TodoItem`, `ALREADY_EXISTS` on id collision.
//! - `GetTodo(TodoId) -> TodoItem`, `NOT_FOUND` when absent.
//! - `UpdateTodo(TodoItem) -> TodoItem`, `NOT_FOUND` when absent.
//! - `DeleteTodo(TodoId) -> Empty`, `NOT_FOUND` when absent.
//! - `ListTodos(Empty) -> TodoList`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_rpc::{grpc, service::TodoHandler, store::JsonFileStore};
//!
//! let handler = Arc::new(TodoHandler::new(JsonFileStore::new("todos.json")));
//!
//! // Get the server to compose with other tonic routes
//! let svc = grpc::grpc_server(handler.clone());
//!
//! // Or serve directly
//! grpc::serve_grpc(handler, "0.0.0.0:50051".parse()?).await?;
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::schema::{Empty, TodoId, TodoItem, TodoList};
use crate::service::{TodoError, TodoHandler};
use crate::store::TodoStore;

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/todoPackage.TodoService.rs"));

pub use todo_service_client::TodoServiceClient;
pub use todo_service_server::{TodoService, TodoServiceServer};

impl From<TodoError> for Status {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::AlreadyExists(_) => Status::already_exists(err.details()),
            TodoError::NotFound(_) => Status::not_found(err.details()),
        }
    }
}

// ---------------------------------------------------------------------------
// Handler implementation
// ---------------------------------------------------------------------------

/// gRPC handler that wraps a shared `TodoHandler<S>` and implements the
/// generated `TodoService` trait.
pub struct GrpcHandler<S> {
    handler: Arc<TodoHandler<S>>,
}

impl<S> GrpcHandler<S> {
    pub fn new(handler: Arc<TodoHandler<S>>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl<S: TodoStore + 'static> TodoService for GrpcHandler<S> {
    async fn create_todo(&self, request: Request<TodoItem>) -> Result<Response<TodoItem>, Status> {
        let todo = self.handler.create(request.into_inner())?;
        Ok(Response::new(todo))
    }

    async fn get_todo(&self, request: Request<TodoId>) -> Result<Response<TodoItem>, Status> {
        let todo = self.handler.get(&request.into_inner().id)?;
        Ok(Response::new(todo))
    }

    async fn update_todo(&self, request: Request<TodoItem>) -> Result<Response<TodoItem>, Status> {
        let todo = self.handler.update(request.into_inner())?;
        Ok(Response::new(todo))
    }

    async fn delete_todo(&self, request: Request<TodoId>) -> Result<Response<Empty>, Status> {
        self.handler.delete(&request.into_inner().id)?;
        Ok(Response::new(Empty {}))
    }

    async fn list_todos(&self, _request: Request<Empty>) -> Result<Response<TodoList>, Status> {
        Ok(Response::new(TodoList {
            todos: self.handler.list(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a `TodoServiceServer` from a shared `TodoHandler<S>`.
pub fn grpc_server<S: TodoStore + 'static>(
    handler: Arc<TodoHandler<S>>,
) -> TodoServiceServer<GrpcHandler<S>> {
    TodoServiceServer::new(GrpcHandler::new(handler))
}

/// Bind and serve the gRPC transport at `addr` until the server stops.
pub async fn serve_grpc<S: TodoStore + 'static>(
    handler: Arc<TodoHandler<S>>,
    addr: SocketAddr,
) -> Result<(), tonic::transport::Error> {
    tracing::info!(%addr, "todo gRPC server listening");
    tonic::transport::Server::builder()
        .add_service(grpc_server(handler))
        .serve(addr)
        .await
}
