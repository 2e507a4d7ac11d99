//! JsonFileStore - the collection as a pretty-printed JSON array in one file.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StoreError, TodoStore};
use crate::schema::{TodoCollection, TodoItem};

/// Flat-file store rooted at a single path.
///
/// Writes go to a sibling `<name>.tmp` file which is then renamed over the
/// target, so a concurrent reader sees either the old or the new collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("todos.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TodoStore for JsonFileStore {
    fn try_load(&self) -> Result<TodoCollection, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read(format!("{}: {}", self.path.display(), e))),
        };
        tracing::debug!(path = %self.path.display(), %data, "read todos");

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data)
            .map_err(|e| StoreError::Parse(format!("{}: {}", self.path.display(), e)))
    }

    fn try_persist(&self, todos: &[TodoItem]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec_pretty(todos).map_err(|e| StoreError::Serialize(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, &bytes)
            .map_err(|e| StoreError::Write(format!("{}: {}", temp.display(), e)))?;
        fs::rename(&temp, &self.path)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            data = %String::from_utf8_lossy(&bytes),
            "wrote todos"
        );
        Ok(())
    }
}
