//! Error types surfaced to RPC callers.

use std::error::Error;
use std::fmt;

/// Caller-visible error code, mirroring the gRPC status codes in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AlreadyExists,
    NotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain errors from the todo handler. Storage failures never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Create was called with an id already in the collection.
    AlreadyExists(String),
    /// Get, Update or Delete named an id that is not in the collection.
    NotFound(String),
}

impl TodoError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TodoError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            TodoError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Human-readable detail string sent alongside the code.
    pub fn details(&self) -> &'static str {
        match self {
            TodoError::AlreadyExists(_) => "Todo with this ID already exists",
            TodoError::NotFound(_) => "Todo not found",
        }
    }

    /// The id the failed call referred to.
    pub fn id(&self) -> &str {
        match self {
            TodoError::AlreadyExists(id) | TodoError::NotFound(id) => id,
        }
    }
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (id {})", self.code(), self.details(), self.id())
    }
}

impl Error for TodoError {}
