use std::fmt;

/// Error type for todo store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    Read(String),
    /// The stored bytes are not a JSON array of todo items.
    Parse(String),
    /// The collection could not be serialized.
    Serialize(String),
    /// The collection could not be written back.
    Write(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Read(msg) => write!(f, "store read error: {}", msg),
            StoreError::Parse(msg) => write!(f, "store parse error: {}", msg),
            StoreError::Serialize(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::Write(msg) => write!(f, "store write error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
