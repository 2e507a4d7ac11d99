//! Batch exporter: JSON todo collection in, protobuf `TodoList` bytes out.
//!
//! Offline one-shot conversion sharing `crate::schema` with the service. It
//! is never on the request path and the service never reads its output.
//! Unlike the store, every failure here is reported to the caller.

use std::fmt;
use std::fs;
use std::path::Path;

use prost::Message;
use serde_json::{Map, Value};

use crate::schema::{TodoItem, TodoList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The JSON input could not be read.
    Read(String),
    /// The JSON input is not valid JSON.
    Parse(String),
    /// The JSON is well-formed but does not match the schema.
    Invalid(String),
    /// The binary output could not be written.
    Write(String),
    /// Bytes are not a valid `TodoList` encoding.
    Decode(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Read(msg) => write!(f, "failed to read input: {}", msg),
            ExportError::Parse(msg) => write!(f, "input is not valid JSON: {}", msg),
            ExportError::Invalid(msg) => write!(f, "input does not match schema: {}", msg),
            ExportError::Write(msg) => write!(f, "failed to write output: {}", msg),
            ExportError::Decode(msg) => write!(f, "failed to decode todo list: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Structurally check a parsed JSON collection and convert it to todo items.
///
/// Known fields must have the right type when present; absent or `null`
/// fields take their zero value. Unknown keys are ignored.
pub fn validate(value: &Value) -> Result<Vec<TodoItem>, ExportError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ExportError::Invalid("todos: array expected".into()))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let obj = entry
                .as_object()
                .ok_or_else(|| ExportError::Invalid(format!("todos.{}: object expected", i)))?;
            Ok(TodoItem {
                id: string_field(obj, i, "id")?,
                title: string_field(obj, i, "title")?,
                description: string_field(obj, i, "description")?,
                completed: bool_field(obj, i, "completed")?,
            })
        })
        .collect()
}

fn string_field(obj: &Map<String, Value>, index: usize, name: &str) -> Result<String, ExportError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ExportError::Invalid(format!(
            "todos.{}.{}: string expected",
            index, name
        ))),
    }
}

fn bool_field(obj: &Map<String, Value>, index: usize, name: &str) -> Result<bool, ExportError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ExportError::Invalid(format!(
            "todos.{}.{}: boolean expected",
            index, name
        ))),
    }
}

/// Encode a collection as a length-delimited-field `TodoList` message.
pub fn encode(todos: &[TodoItem]) -> Vec<u8> {
    TodoList {
        todos: todos.to_vec(),
    }
    .encode_to_vec()
}

pub fn decode(bytes: &[u8]) -> Result<Vec<TodoItem>, ExportError> {
    TodoList::decode(bytes)
        .map(|list| list.todos)
        .map_err(|e| ExportError::Decode(e.to_string()))
}

/// Read `input` as JSON, validate it, and write its binary encoding to
/// `output`. Returns the number of items exported.
pub fn export_file(input: &Path, output: &Path) -> Result<usize, ExportError> {
    let data = fs::read_to_string(input)
        .map_err(|e| ExportError::Read(format!("{}: {}", input.display(), e)))?;
    let value: Value =
        serde_json::from_str(&data).map_err(|e| ExportError::Parse(e.to_string()))?;
    let todos = validate(&value)?;

    fs::write(output, encode(&todos))
        .map_err(|e| ExportError::Write(format!("{}: {}", output.display(), e)))?;

    tracing::info!(
        output = %output.display(),
        count = todos.len(),
        "exported todos to protobuf binary"
    );
    Ok(todos.len())
}

/// Decode a file written by `export_file`.
pub fn read_exported(path: &Path) -> Result<Vec<TodoItem>, ExportError> {
    let bytes =
        fs::read(path).map_err(|e| ExportError::Read(format!("{}: {}", path.display(), e)))?;
    decode(&bytes)
}
